pub mod city;
pub mod colony;
pub mod config;
pub mod error;
pub mod experiment;
pub mod pheromone;
pub mod report;
pub mod tsplib;

pub use city::{City, CostMatrix};
pub use colony::{Ant, Colony, RoundResult, Tour};
pub use config::{Config, EvaporationSchedule};
pub use error::{AntError, AntResult};
pub use experiment::{ExperimentResult, ExperimentRunner, RunResult};
pub use pheromone::PheromoneMatrix;
pub use tsplib::{parse_cities, read_cities_from_file};
