use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::city::CostMatrix;
use crate::config::Config;
use crate::pheromone::PheromoneMatrix;

mod ant;
pub use ant::Ant;

/// 一條走完所有城市的環狀路徑，`length` 包含回到起點的那條邊
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tour {
    pub cities: Vec<usize>,
    pub length: f64,
}

#[derive(Clone, Debug)]
pub struct RoundResult {
    pub best: Tour,
    pub mean: f64,
    pub lengths: Vec<f64>,
}

/// 帶著一群螞蟻跑一個回合：先各自建構路徑，全部走完後才依序更新費洛蒙。
pub struct Colony<'a> {
    cost: &'a CostMatrix,
    config: &'a Config,
}

impl<'a> Colony<'a> {
    pub fn new(cost: &'a CostMatrix, config: &'a Config) -> Self {
        Colony { cost, config }
    }
    pub fn do_single_round<R: Rng>(&self, tau: &mut PheromoneMatrix, rng: &mut R) -> RoundResult {
        // 每隻螞蟻拿自己的種子，平行與否結果都一樣
        let seeds: Vec<u64> = (0..self.config.ant_count).map(|_| rng.gen()).collect();
        let tours = self.construct_tours(tau, &seeds);

        for tour in tours.iter() {
            tau.intensify(&tour.cities, tour.length, self.config.q);
        }

        let lengths: Vec<f64> = tours.iter().map(|t| t.length).collect();
        let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
        let best = tours
            .into_iter()
            .fold(None, |best: Option<Tour>, tour| match best {
                Some(b) if b.length <= tour.length => Some(b),
                _ => Some(tour),
            })
            .unwrap_or(Tour {
                cities: vec![],
                length: 0.0,
            });
        RoundResult {
            best,
            mean,
            lengths,
        }
    }
    #[cfg(not(feature = "parallel"))]
    fn construct_tours(&self, tau: &PheromoneMatrix, seeds: &[u64]) -> Vec<Tour> {
        seeds.iter().map(|&seed| self.run_ant(tau, seed)).collect()
    }
    #[cfg(feature = "parallel")]
    fn construct_tours(&self, tau: &PheromoneMatrix, seeds: &[u64]) -> Vec<Tour> {
        seeds.par_iter().map(|&seed| self.run_ant(tau, seed)).collect()
    }
    fn run_ant(&self, tau: &PheromoneMatrix, seed: u64) -> Tour {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let start = rng.gen_range(0..self.cost.len());
        Ant::new(self.cost.len(), start).construct(
            self.cost,
            tau,
            self.config.alpha,
            self.config.beta,
            &mut rng,
        )
    }
}
