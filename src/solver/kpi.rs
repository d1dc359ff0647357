//! Seek plan quality metrics (KPIs).
//!
//! Computes standard disk-scheduling performance indicators from a
//! completed seek plan.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Movement | Sum of all step distances |
//! | Service Count | Steps that service a request |
//! | Serviced At Head | Requests satisfied without movement |
//! | Boundary Sweeps | Mandatory edge visits (0 or 1 for SCAN) |
//! | Max Seek | Largest single step distance |
//! | Avg Seek | Mean step distance |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2

use crate::models::SeekPlan;

/// Seek plan performance indicators.
///
/// All distances are in tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekKpi {
    /// Total head movement across all steps.
    pub total_movement: u64,
    /// Number of request-servicing steps.
    pub service_count: usize,
    /// Requests serviced in place at the starting head position.
    pub serviced_at_head: usize,
    /// Number of boundary-sweep steps.
    pub boundary_sweeps: usize,
    /// Largest single step distance.
    pub max_seek_distance: u32,
    /// Mean step distance (0.0 for a plan with no steps).
    pub avg_seek_distance: f64,
}

impl SeekKpi {
    /// Computes KPIs from a completed plan.
    pub fn calculate(plan: &SeekPlan) -> Self {
        let total = plan.total_movement();
        let steps = plan.step_count();
        let max = plan.steps.iter().map(|s| s.distance()).max().unwrap_or(0);
        let avg = if steps == 0 {
            0.0
        } else {
            total as f64 / steps as f64
        };

        Self {
            total_movement: total,
            service_count: plan.service_count(),
            serviced_at_head: plan.serviced_at_head,
            boundary_sweeps: plan.boundary_sweeps(),
            max_seek_distance: max,
            avg_seek_distance: avg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, SeekStep};
    use crate::solver::ScanSolver;

    #[test]
    fn test_kpi_of_textbook_plan() {
        let plan = ScanSolver::new().solve(
            &[82, 170, 43, 140, 24, 16, 190],
            50,
            Direction::TowardLarger,
            199,
        );
        let kpi = SeekKpi::calculate(&plan);

        assert_eq!(kpi.total_movement, 332);
        assert_eq!(kpi.service_count, 7);
        assert_eq!(kpi.serviced_at_head, 0);
        assert_eq!(kpi.boundary_sweeps, 1);
        assert_eq!(kpi.max_seek_distance, 156); // 199 → 43
        assert!((kpi.avg_seek_distance - 332.0 / 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_of_empty_plan() {
        let plan = SeekPlan::new(50);
        let kpi = SeekKpi::calculate(&plan);

        assert_eq!(kpi.total_movement, 0);
        assert_eq!(kpi.service_count, 0);
        assert_eq!(kpi.boundary_sweeps, 0);
        assert_eq!(kpi.max_seek_distance, 0);
        assert_eq!(kpi.avg_seek_distance, 0.0);
    }

    #[test]
    fn test_kpi_counts_at_head_requests() {
        let plan = ScanSolver::new().solve(&[50, 50, 80], 50, Direction::TowardLarger, 100);
        let kpi = SeekKpi::calculate(&plan);
        assert_eq!(kpi.serviced_at_head, 2);
        assert_eq!(kpi.service_count, 1);
    }

    #[test]
    fn test_kpi_avg_includes_sweep_steps() {
        let mut plan = SeekPlan::new(0);
        plan.add_step(SeekStep::service(0, 10));
        plan.add_step(SeekStep::boundary_sweep(10, 50));
        let kpi = SeekKpi::calculate(&plan);
        assert!((kpi.avg_seek_distance - 25.0).abs() < 1e-10);
        assert_eq!(kpi.max_seek_distance, 40);
    }
}
