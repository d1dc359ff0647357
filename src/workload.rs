//! Random request-set generation.
//!
//! Produces uniform workloads for exercises, demos, and property
//! tests. Generation is driven by a caller-supplied [`Rng`], so seeded
//! runs are reproducible.

use rand::Rng;
use std::collections::HashSet;

use crate::models::Track;

/// A random workload description.
///
/// # Example
///
/// ```
/// use disk_scan::workload::Workload;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let requests = Workload::new(199).with_request_count(8).generate(&mut rng);
/// assert_eq!(requests.len(), 8);
/// assert!(requests.iter().all(|&t| t <= 199));
/// ```
#[derive(Debug, Clone)]
pub struct Workload {
    disk_bound: Track,
    request_count: usize,
    deduplicate: bool,
}

impl Workload {
    /// Creates a workload of 10 requests over `[0, disk_bound]`.
    pub fn new(disk_bound: Track) -> Self {
        Self {
            disk_bound,
            request_count: 10,
            deduplicate: false,
        }
    }

    /// Sets the number of requests to draw.
    pub fn with_request_count(mut self, count: usize) -> Self {
        self.request_count = count;
        self
    }

    /// Draws distinct tracks only, redrawing collisions.
    ///
    /// The result is capped at `disk_bound + 1` values, the number of
    /// distinct tracks that exist.
    pub fn with_deduplication(mut self) -> Self {
        self.deduplicate = true;
        self
    }

    /// Draws a request set from the given RNG.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Track> {
        if self.deduplicate {
            let distinct_tracks = self.disk_bound as usize + 1;
            let target = self.request_count.min(distinct_tracks);
            let mut seen = HashSet::with_capacity(target);
            let mut requests = Vec::with_capacity(target);
            while requests.len() < target {
                let track = rng.random_range(0..=self.disk_bound);
                if seen.insert(track) {
                    requests.push(track);
                }
            }
            requests
        } else {
            (0..self.request_count)
                .map(|_| rng.random_range(0..=self.disk_bound))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_generate_respects_count_and_bound() {
        let mut rng = SmallRng::seed_from_u64(42);
        let requests = Workload::new(199).with_request_count(50).generate(&mut rng);
        assert_eq!(requests.len(), 50);
        assert!(requests.iter().all(|&t| t <= 199));
    }

    #[test]
    fn test_generate_is_reproducible() {
        let workload = Workload::new(199).with_request_count(20);
        let a = workload.generate(&mut SmallRng::seed_from_u64(7));
        let b = workload.generate(&mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_deduplication_yields_distinct_tracks() {
        let mut rng = SmallRng::seed_from_u64(42);
        let requests = Workload::new(30)
            .with_request_count(20)
            .with_deduplication()
            .generate(&mut rng);
        let mut sorted = requests.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), requests.len());
    }

    #[test]
    fn test_deduplication_caps_at_track_count() {
        // Only 5 distinct tracks exist on a bound-4 disk
        let mut rng = SmallRng::seed_from_u64(42);
        let requests = Workload::new(4)
            .with_request_count(100)
            .with_deduplication()
            .generate(&mut rng);
        assert_eq!(requests.len(), 5);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(Workload::new(199)
            .with_request_count(0)
            .generate(&mut rng)
            .is_empty());
    }
}
