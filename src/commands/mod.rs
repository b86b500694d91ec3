//! Command implementations

pub mod show;
pub mod simple;
pub mod simulate;

pub use show::run_show;
pub use simple::run_simple;
pub use simulate::{
    SimulationConfig, SimulationStatistics, print_simulation_statistics, run_simulation,
};
