pub const BASE_PHEROMONE: f64 = 1.0;

/// 費洛蒙矩陣。對角線恆為 0，其餘格子恆大於 0。
#[derive(Clone, Debug)]
pub struct PheromoneMatrix {
    tau: Vec<Vec<f64>>,
    base: f64,
}

impl PheromoneMatrix {
    pub fn new(n: usize, base: Option<f64>) -> Self {
        let mut matrix = PheromoneMatrix {
            tau: vec![],
            base: BASE_PHEROMONE,
        };
        matrix.initialize(n, base.unwrap_or(BASE_PHEROMONE));
        matrix
    }
    /// 不論先前被改成什麼樣子，一律重設為 n×n 的初始狀態
    pub fn initialize(&mut self, n: usize, base: f64) {
        self.base = base;
        self.tau = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { base }).collect())
            .collect();
    }
    pub fn len(&self) -> usize {
        self.tau.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tau.is_empty()
    }
    pub fn base(&self) -> f64 {
        self.base
    }
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.tau[from][to]
    }
    pub fn evaporate(&mut self, rho: f64) {
        let base = self.base;
        for (i, row) in self.tau.iter_mut().enumerate() {
            for (j, ph) in row.iter_mut().enumerate() {
                if i == j {
                    continue;
                }
                let next = *ph * (1.0 - rho);
                // 蒸發到沒有了就回到初始值，否則這條邊永遠不會再被選到
                *ph = if next > 0.0 { next } else { base };
            }
        }
    }
    /// 在路徑（視為環）經過的每條邊上，雙向各加上 q / tour_length
    pub fn intensify(&mut self, tour: &[usize], tour_length: f64, q: f64) {
        if !(tour_length > 0.0 && tour_length.is_finite()) {
            tracing::debug!(tour_length, "路徑長度非正，略過費洛蒙更新");
            return;
        }
        let delta = q / tour_length;
        let n = tour.len();
        for c in 0..n {
            let (from, to) = (tour[c], tour[(c + 1) % n]);
            if from == to {
                continue;
            }
            let ph = self.tau[from][to] + delta;
            self.tau[from][to] = ph;
            self.tau[to][from] = ph;
        }
    }
    #[cfg(test)]
    pub(crate) fn set(&mut self, from: usize, to: usize, ph: f64) {
        self.tau[from][to] = ph;
    }
}
