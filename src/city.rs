use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        City { x, y }
    }
    pub fn distance(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// 城市間的歐氏距離表，建好之後就不再變動。
#[derive(Clone, Debug)]
pub struct CostMatrix {
    cost: Vec<Vec<f64>>,
}

impl CostMatrix {
    pub fn new(cities: &[City]) -> Self {
        let n = cities.len();
        let mut cost = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance(&cities[j]);
                cost[i][j] = d;
                cost[j][i] = d;
            }
        }
        CostMatrix { cost }
    }
    pub fn len(&self) -> usize {
        self.cost.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cost.is_empty()
    }
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cost[from][to]
    }
    /// 整條環狀路徑的長度，包含最後一城回到起點的那條邊
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n).map(|i| self.get(tour[i], tour[(i + 1) % n])).sum()
    }
}
