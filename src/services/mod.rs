//! Services module
//!
//! This module contains the runs the entry points trigger.

pub mod batch_run;
pub mod one_shot;

pub use batch_run::BatchRunService;
pub use one_shot::run_once;
