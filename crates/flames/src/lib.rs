//! FLAMES relationship calculator and the ambient pieces (configuration,
//! telemetry, errors, CSV batch scoring) shared by the service and CLI.

pub mod batch;
pub mod calculator;
pub mod config;
pub mod error;
pub mod telemetry;

pub use calculator::{compute, compute_message, evaluate, Category, Outcome, Reading};
