use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::city::{City, CostMatrix};
use crate::colony::{Colony, Tour};
use crate::config::{Config, EvaporationSchedule};
use crate::error::{AntError, AntResult};
use crate::pheromone::PheromoneMatrix;


#[derive(Clone, Debug, Serialize)]
pub struct ExperimentResult {
    /// 各回合最佳路徑長度的平均
    pub mean_best: f64,
    /// 各回合平均路徑長度的平均
    pub mean_avg: f64,
    pub best_tour: Tour,
}

#[derive(Clone, Debug, Serialize)]
pub struct RunResult {
    pub seed: u64,
    pub experiments: Vec<ExperimentResult>,
    /// 所有實驗中最短的那條路徑
    pub best_tour: Tour,
}

/// 持有距離表、設定與亂數產生器，反覆進行獨立實驗。
/// 每次實驗都從全新的費洛蒙矩陣開始。
pub struct ExperimentRunner {
    cost: CostMatrix,
    config: Config,
    seed: u64,
    rng: ChaCha8Rng,
}

impl ExperimentRunner {
    pub fn new(cities: &[City], config: Config) -> AntResult<Self> {
        if cities.is_empty() {
            return Err(AntError::NoCities);
        }
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        Ok(ExperimentRunner {
            cost: CostMatrix::new(cities),
            config,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn cost(&self) -> &CostMatrix {
        &self.cost
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn run(&mut self) -> RunResult {
        info!(
            seed = self.seed,
            cities = self.cost.len(),
            experiments = self.config.experiments,
            rounds = self.config.rounds,
            ants = self.config.ant_count,
            "開始執行"
        );
        let mut experiments = Vec::with_capacity(self.config.experiments);
        let mut best_tour: Option<Tour> = None;
        for i in 0..self.config.experiments {
            let res = self.do_experiment(i);
            let improved = match &best_tour {
                Some(best) => res.best_tour.length < best.length,
                None => true,
            };
            if improved {
                best_tour = Some(res.best_tour.clone());
            }
            experiments.push(res);
        }
        RunResult {
            seed: self.seed,
            experiments,
            best_tour: best_tour.unwrap_or(Tour {
                cities: vec![],
                length: 0.0,
            }),
        }
    }
    pub fn do_experiment(&mut self, index: usize) -> ExperimentResult {
        let config = self.config;
        let mut tau = PheromoneMatrix::new(self.cost.len(), Some(config.base_pheromone));
        let colony = Colony::new(&self.cost, &config);

        let mut best_sum = 0.0;
        let mut avg_sum = 0.0;
        let mut best_tour: Option<Tour> = None;
        for round in 0..config.rounds {
            let res = colony.do_single_round(&mut tau, &mut self.rng);
            debug!(experiment = index, round, best = res.best.length, mean = res.mean);
            best_sum += res.best.length;
            avg_sum += res.mean;
            let improved = match &best_tour {
                Some(best) => res.best.length < best.length,
                None => true,
            };
            if improved {
                best_tour = Some(res.best);
            }
            if let EvaporationSchedule::EveryRounds(k) = config.evaporation {
                if (round + 1) % k == 0 {
                    tau.evaporate(config.rho);
                }
            }
        }
        if let EvaporationSchedule::PerExperiment = config.evaporation {
            tau.evaporate(config.rho);
        }

        let rounds = config.rounds as f64;
        let res = ExperimentResult {
            mean_best: best_sum / rounds,
            mean_avg: avg_sum / rounds,
            best_tour: best_tour.unwrap_or(Tour {
                cities: vec![],
                length: 0.0,
            }),
        };
        info!(
            experiment = index,
            mean_best = res.mean_best,
            mean_avg = res.mean_avg,
            best = res.best_tour.length,
            "實驗結束"
        );
        res
    }
}
