use std::collections::VecDeque;

pub const MAX_HISTORY: usize = 10;

/// Most recent car load samples, recorded as cars pass or stop at floors.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadHistory {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl Default for LoadHistory {
    fn default() -> Self {
        LoadHistory::new(MAX_HISTORY)
    }
}

impl LoadHistory {
    pub fn new(capacity: usize) -> Self {
        LoadHistory {
            samples: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&mut self, load_factor: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(load_factor);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn average(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_most_recent_samples() {
        let mut history = LoadHistory::new(3);
        for load in [0.1, 0.2, 0.3, 0.4] {
            history.record(load);
        }
        assert_eq!(history.len(), 3);
        let average = history.average().unwrap();
        assert!((average - 0.3).abs() < 1e-9);
    }

    #[test]
    fn empty_history_has_no_average() {
        let history = LoadHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.average(), None);
    }
}
