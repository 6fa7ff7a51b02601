use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{AntError, AntResult};
use crate::experiment::RunResult;

pub fn show_brief(result: &RunResult) {
    let times = result.experiments.len() as f64;
    let mut all_best = 0.0;
    let mut all_avg = 0.0;
    println!(
        "{0: <12} {1: <16} {2: <16} best length",
        "", "mean best", "mean average"
    );
    for (i, exp) in result.experiments.iter().enumerate() {
        all_best += exp.mean_best;
        all_avg += exp.mean_avg;
        println!(
            "{0: <12} {1: <16.4} {2: <16.4} {3:.4}",
            format!("test #{}", i),
            exp.mean_best,
            exp.mean_avg,
            exp.best_tour.length
        );
    }
    if times > 0.0 {
        println!(
            "{0: <12} {1: <16.4} {2: <16.4} {3:.4}",
            "average:",
            all_best / times,
            all_avg / times,
            result.best_tour.length
        );
    }
    println!("seed = {}", result.seed);
    println!(
        "best tour (length = {:.4}): {:?}",
        result.best_tour.length, result.best_tour.cities
    );
}

/// 將結果寫成 JSON，給畫圖的工具讀
pub fn write_json(result: &RunResult, path: impl AsRef<Path>) -> AntResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| AntError::Io {
        path: path.to_owned(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, result).map_err(AntError::Report)?;
    // drop 時 flush 的錯誤不會回報
    writer.flush().map_err(|source| AntError::Io {
        path: path.to_owned(),
        source,
    })
}
