use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ant_tour::{read_cities_from_file, report, Config, ExperimentRunner};

#[derive(Parser, Debug)]
#[command(about = "以蟻群演算法求解歐氏旅行推銷員問題", version)]
struct Args {
    /// TSPLIB 格式的題目檔
    #[arg(default_value = "TSP")]
    problem: PathBuf,
    /// 設定檔，不給的話依序找 config.json、config.example.json
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    ants: Option<usize>,
    #[arg(long)]
    rounds: Option<usize>,
    #[arg(long)]
    experiments: Option<usize>,
    /// 將結果以 JSON 寫到此路徑
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("無法載入設定檔 {}", path.display()))?,
        None => Config::load_default().context("無法載入設定檔")?,
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(ants) = args.ants {
        config.ant_count = ants;
    }
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    if let Some(experiments) = args.experiments {
        config.experiments = experiments;
    }

    let cities = read_cities_from_file(&args.problem)
        .with_context(|| format!("無法讀取題目 {}", args.problem.display()))?;
    info!(file = %args.problem.display(), cities = cities.len(), "題目載入完成");

    let mut runner = ExperimentRunner::new(&cities, config)?;
    let result = runner.run();
    report::show_brief(&result);

    if let Some(path) = &args.output {
        report::write_json(&result, path)
            .with_context(|| format!("無法寫入 {}", path.display()))?;
        info!(file = %path.display(), "結果已寫出");
    }
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("無法建立日誌過濾器")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}
