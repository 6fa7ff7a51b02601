use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{AntError, AntResult};
use crate::pheromone::BASE_PHEROMONE;

const RHO: f64 = 0.6;
const Q: f64 = 1.0;
const ALPHA: f64 = 0.8;
const BETA: f64 = 0.8;
const ANT_COUNT: usize = 10;
const ROUNDS: usize = 500;
const EXPERIMENTS: usize = 10;

/// 何時蒸發費洛蒙
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum EvaporationSchedule {
    /// 每次實驗跑完所有回合後蒸發一次
    PerExperiment,
    /// 每 k 個回合蒸發一次
    EveryRounds(usize),
}

impl Default for EvaporationSchedule {
    fn default() -> Self {
        EvaporationSchedule::PerExperiment
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
#[serde(default)]
pub struct Config {
    /// 蒸發率，必需落在 (0, 1)
    pub rho: f64,
    /// 每隻螞蟻留下的費洛蒙總量
    pub q: f64,
    /// 費洛蒙的權重指數
    pub alpha: f64,
    /// 距離倒數的權重指數
    pub beta: f64,
    /// 每回合的螞蟻數量
    pub ant_count: usize,
    /// 每次實驗的回合數
    pub rounds: usize,
    /// 獨立實驗的次數
    pub experiments: usize,
    pub base_pheromone: f64,
    pub evaporation: EvaporationSchedule,
    /// 亂數種子，不給的話每次執行都不同
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rho: RHO,
            q: Q,
            alpha: ALPHA,
            beta: BETA,
            ant_count: ANT_COUNT,
            rounds: ROUNDS,
            experiments: EXPERIMENTS,
            base_pheromone: BASE_PHEROMONE,
            evaporation: EvaporationSchedule::default(),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_json(txt: &str) -> AntResult<Self> {
        let config: Config = serde_json::from_str(txt).map_err(AntError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }
    pub fn load(path: impl AsRef<Path>) -> AntResult<Self> {
        let path = path.as_ref();
        let txt = fs::read_to_string(path).map_err(|source| AntError::Io {
            path: path.to_owned(),
            source,
        })?;
        Config::from_json(&txt)
    }
    /// 依序找 `config.json`、`config.example.json`，都沒有就用預設值
    pub fn load_default() -> AntResult<Self> {
        for name in ["config.json", "config.example.json"].iter() {
            if Path::new(name).exists() {
                return Config::load(name);
            }
        }
        Ok(Config::default())
    }
    pub fn validate(&self) -> AntResult<()> {
        if !(self.rho > 0.0 && self.rho < 1.0) {
            return Err(AntError::invalid_config(
                "rho",
                format!("必需介於 0 與 1 之間（不含），目前為 {}", self.rho),
            ));
        }
        if !(self.q > 0.0 && self.q.is_finite()) {
            return Err(AntError::invalid_config(
                "q",
                format!("必需為正數，目前為 {}", self.q),
            ));
        }
        if !(self.base_pheromone > 0.0 && self.base_pheromone.is_finite()) {
            return Err(AntError::invalid_config(
                "base_pheromone",
                format!("必需為正數，目前為 {}", self.base_pheromone),
            ));
        }
        for &(field, value) in [("alpha", self.alpha), ("beta", self.beta)].iter() {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(AntError::invalid_config(
                    field,
                    format!("必需為非負的有限數，目前為 {}", value),
                ));
            }
        }
        for &(field, value) in [
            ("ant_count", self.ant_count),
            ("rounds", self.rounds),
            ("experiments", self.experiments),
        ]
        .iter()
        {
            if value == 0 {
                return Err(AntError::invalid_config(field, "必需大於 0"));
            }
        }
        if let EvaporationSchedule::EveryRounds(0) = self.evaporation {
            return Err(AntError::invalid_config("evaporation", "回合間隔必需大於 0"));
        }
        Ok(())
    }
}
