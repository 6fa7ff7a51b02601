//! 讀取 TSPLIB 格式的題目檔，只取 `DIMENSION` 與 `NODE_COORD_SECTION` 裡的座標。

use regex::Regex;
use std::fs;
use std::path::Path;

use crate::city::City;
use crate::error::{AntError, AntResult};

pub fn read_cities_from_file(file_name: impl AsRef<Path>) -> AntResult<Vec<City>> {
    let path = file_name.as_ref();
    let txt = fs::read_to_string(path).map_err(|source| AntError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_cities(&txt)
}

pub fn parse_cities(txt: &str) -> AntResult<Vec<City>> {
    let dim_re = Regex::new(r"^\s*DIMENSION\s*:?\s*(\S*)\s*$").expect("DIMENSION 正規表示式錯誤");
    let coord_re =
        Regex::new(r"^\s*\d+\s+(\S+)\s+(\S+)\s*$").expect("座標正規表示式錯誤");

    let mut lines = txt.lines().enumerate();
    let mut dim = None;
    for (_, line) in lines.by_ref() {
        if let Some(cap) = dim_re.captures(line) {
            let raw = &cap[1];
            dim = Some(
                raw.parse::<usize>()
                    .map_err(|_| AntError::InvalidDimension(raw.to_owned()))?,
            );
            break;
        }
    }
    let dim = dim.ok_or(AntError::MissingDimension)?;
    if dim == 0 {
        return Err(AntError::NoCities);
    }

    let mut cities = Vec::with_capacity(dim);
    let mut in_section = false;
    for (i, line) in lines {
        let trimmed = line.trim();
        if trimmed.starts_with("EOF") {
            break;
        }
        if !in_section {
            in_section = trimmed.starts_with("NODE_COORD_SECTION");
            continue;
        }
        if trimmed.is_empty() || cities.len() == dim {
            continue;
        }
        let invalid = || AntError::InvalidCoordinate {
            line: i + 1,
            text: line.to_owned(),
        };
        let cap = coord_re.captures(line).ok_or_else(invalid)?;
        let x = cap[1].parse::<f64>().map_err(|_| invalid())?;
        let y = cap[2].parse::<f64>().map_err(|_| invalid())?;
        cities.push(City::new(x, y));
    }

    if cities.len() < dim {
        return Err(AntError::CoordinateCount {
            expected: dim,
            found: cities.len(),
        });
    }
    Ok(cities)
}
