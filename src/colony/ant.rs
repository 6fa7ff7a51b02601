use rand::seq::SliceRandom;
use rand::Rng;

use super::Tour;
use crate::city::CostMatrix;
use crate::pheromone::PheromoneMatrix;

/// 一隻螞蟻在一個回合內的狀態。回合結束後只留下 `Tour`。
pub struct Ant {
    tabu: Vec<bool>,
    current: usize,
    tour: Vec<usize>,
    tour_length: f64,
}

impl Ant {
    /// 從 `start` 出發，起點直接記為已拜訪。
    ///
    /// # Panics
    ///
    /// `start` 不小於 `city_cnt` 時（包含沒有任何城市）會 panic。
    pub fn new(city_cnt: usize, start: usize) -> Self {
        assert!(start < city_cnt, "起點 {} 超出城市數量 {}", start, city_cnt);
        let mut tabu = vec![false; city_cnt];
        tabu[start] = true;
        let mut tour = Vec::with_capacity(city_cnt);
        tour.push(start);
        Ant {
            tabu,
            current: start,
            tour,
            tour_length: 0.0,
        }
    }
    pub fn current(&self) -> usize {
        self.current
    }
    pub fn is_visited(&self, city: usize) -> bool {
        self.tabu[city]
    }
    /// 走完全部城市並回到起點
    pub fn construct<R: Rng>(
        mut self,
        cost: &CostMatrix,
        tau: &PheromoneMatrix,
        alpha: f64,
        beta: f64,
        rng: &mut R,
    ) -> Tour {
        for _ in 1..self.tabu.len() {
            let next = self.select_next(cost, tau, alpha, beta, rng);
            self.advance(next, cost);
        }
        self.close(cost)
    }
    /// 選擇下一個城市。
    ///
    /// 從編號 0 開始依序掃過尚未拜訪的城市，每個城市以 `score / Z` 的機率被接受，
    /// 沒被接受就換下一個，掃到底再繞回來。這不是輪盤法，編號小的城市會略佔便宜。
    ///
    /// # Panics
    ///
    /// 所有城市都已拜訪過時會 panic。
    pub fn select_next<R: Rng>(
        &self,
        cost: &CostMatrix,
        tau: &PheromoneMatrix,
        alpha: f64,
        beta: f64,
        rng: &mut R,
    ) -> usize {
        let from = self.current;
        let n = self.tabu.len();
        let candidates: Vec<usize> = (0..n).filter(|&to| to != from && !self.tabu[to]).collect();
        assert!(!candidates.is_empty(), "已經沒有可以前往的城市");

        let scores: Vec<f64> = candidates
            .iter()
            .map(|&to| score(tau.get(from, to), cost.get(from, to), alpha, beta))
            .collect();

        // 重疊的城市距離為零，分數無限大，直接在它們之間均勻挑一個
        let infinite: Vec<usize> = candidates
            .iter()
            .zip(scores.iter())
            .filter(|(_, s)| s.is_infinite())
            .map(|(&to, _)| to)
            .collect();
        if let Some(&to) = infinite.choose(rng) {
            return to;
        }

        let denom: f64 = scores.iter().sum();
        if !(denom > 0.0 && denom.is_finite()) {
            tracing::trace!(from, denom, "所有候選城市的分數皆為零，改用均勻選擇");
            return *candidates.choose(rng).unwrap_or(&candidates[0]);
        }

        loop {
            for (&to, &s) in candidates.iter().zip(scores.iter()) {
                if rng.gen::<f64>() < s / denom {
                    return to;
                }
            }
        }
    }
    pub fn advance(&mut self, to: usize, cost: &CostMatrix) {
        debug_assert!(!self.tabu[to]);
        self.tabu[to] = true;
        self.tour.push(to);
        self.tour_length += cost.get(self.current, to);
        self.current = to;
    }
    pub fn close(mut self, cost: &CostMatrix) -> Tour {
        if let (Some(&first), Some(&last)) = (self.tour.first(), self.tour.last()) {
            self.tour_length += cost.get(last, first);
        }
        Tour {
            cities: self.tour,
            length: self.tour_length,
        }
    }
}

#[inline]
fn score(tau: f64, dist: f64, alpha: f64, beta: f64) -> f64 {
    tau.powf(alpha) * (1.0 / dist).powf(beta)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::city::City;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn random_cities(rng: &mut ChaCha8Rng, n: usize) -> Vec<City> {
        (0..n)
            .map(|_| City::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
            .collect()
    }

    fn assert_permutation(tour: &Tour, n: usize) {
        let mut sorted = tour.cities.clone();
        sorted.sort();
        assert_eq!((0..n).collect::<Vec<_>>(), sorted);
    }

    #[test]
    fn test_tour_is_permutation_with_matching_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for &n in [1, 2, 3, 7, 30].iter() {
            let cities = random_cities(&mut rng, n);
            let cost = CostMatrix::new(&cities);
            let tau = PheromoneMatrix::new(n, None);
            for _ in 0..20 {
                let start = rng.gen_range(0..n);
                let tour = Ant::new(n, start).construct(&cost, &tau, 0.8, 0.8, &mut rng);
                assert_eq!(start, tour.cities[0]);
                assert_permutation(&tour, n);
                assert!((cost.tour_length(&tour.cities) - tour.length).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_single_city() {
        let cost = CostMatrix::new(&[City::new(2.0, 3.0)]);
        let tau = PheromoneMatrix::new(1, None);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let tour = Ant::new(1, 0).construct(&cost, &tau, 0.8, 0.8, &mut rng);
        assert_eq!(vec![0], tour.cities);
        assert_eq!(0.0, tour.length);
    }

    #[test]
    fn test_never_selects_visited() {
        let cities: Vec<City> = (0..6).map(|i| City::new(i as f64, 0.0)).collect();
        let cost = CostMatrix::new(&cities);
        let tau = PheromoneMatrix::new(6, None);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut ant = Ant::new(6, 2);
        ant.advance(3, &cost);
        ant.advance(1, &cost);
        for _ in 0..200 {
            let next = ant.select_next(&cost, &tau, 0.8, 0.8, &mut rng);
            assert!(!ant.is_visited(next));
            assert_ne!(ant.current(), next);
        }
    }

    #[test]
    fn test_prefers_stronger_trail() {
        // 三個城市離起點一樣遠，只有費洛蒙不同
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(0.0, 1.0),
            City::new(-1.0, 0.0),
        ];
        let cost = CostMatrix::new(&cities);
        let mut tau = PheromoneMatrix::new(4, None);
        tau.set(0, 3, 50.0);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let ant = Ant::new(4, 0);
        let mut counts = [0usize; 4];
        for _ in 0..2000 {
            counts[ant.select_next(&cost, &tau, 1.0, 1.0, &mut rng)] += 1;
        }
        assert_eq!(0, counts[0]);
        assert!(counts[3] > counts[1] + counts[2]);
    }

    #[test]
    fn test_scan_favors_lower_index() {
        // 四個城市離起點一樣遠、費洛蒙也一樣，每個的 p 都是 0.25
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(0.0, 1.0),
            City::new(-1.0, 0.0),
            City::new(0.0, -1.0),
        ];
        let cost = CostMatrix::new(&cities);
        let tau = PheromoneMatrix::new(5, None);
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let ant = Ant::new(5, 0);
        let draws = 20000;
        let mut counts = [0usize; 5];
        for _ in 0..draws {
            counts[ant.select_next(&cost, &tau, 0.8, 0.8, &mut rng)] += 1;
        }
        // 理論值約為 0.369 / 0.277 / 0.208 / 0.156
        assert_eq!(0, counts[0]);
        for i in 1..4 {
            assert!(counts[i] > counts[i + 1], "{:?}", counts);
        }
        assert!(counts[1] as f64 / draws as f64 > 0.33, "{:?}", counts);
        assert!((counts[4] as f64 / draws as f64) < 0.19, "{:?}", counts);
    }

    #[test]
    fn test_zero_denominator_falls_back_to_uniform() {
        let cities: Vec<City> = (0..5).map(|i| City::new(i as f64, 1.0)).collect();
        let cost = CostMatrix::new(&cities);
        let mut tau = PheromoneMatrix::new(5, None);
        for to in 1..5 {
            tau.set(0, to, 0.0);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let ant = Ant::new(5, 0);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[ant.select_next(&cost, &tau, 0.8, 0.8, &mut rng)] = true;
        }
        assert_eq!([false, true, true, true, true], seen);
    }

    #[test]
    fn test_coincident_cities() {
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(5.0, 5.0),
            City::new(0.0, 0.0),
            City::new(0.0, 0.0),
        ];
        let cost = CostMatrix::new(&cities);
        let tau = PheromoneMatrix::new(4, None);
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..50 {
            let ant = Ant::new(4, 0);
            let next = ant.select_next(&cost, &tau, 0.8, 0.8, &mut rng);
            assert!(next == 2 || next == 3);
            let tour = Ant::new(4, 0).construct(&cost, &tau, 0.8, 0.8, &mut rng);
            assert_permutation(&tour, 4);
            assert!(tour.length.is_finite());
        }
    }

    #[test]
    fn test_same_seed_same_tour() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let cities = random_cities(&mut rng, 12);
        let cost = CostMatrix::new(&cities);
        let tau = PheromoneMatrix::new(12, None);
        let a = Ant::new(12, 4).construct(&cost, &tau, 0.8, 0.8, &mut ChaCha8Rng::seed_from_u64(77));
        let b = Ant::new(12, 4).construct(&cost, &tau, 0.8, 0.8, &mut ChaCha8Rng::seed_from_u64(77));
        assert_eq!(a.cities, b.cities);
        assert_eq!(a.length, b.length);
    }
}
