//! Lander Simulated Backend
//!
//! An in-process job store for offline development and demos. It speaks
//! the same job-status vocabulary as the real server and plugs into the
//! client wherever a [`lander_client::JobBackend`] is expected.
//!
//! - [`SimulationConfig`]: latency, failure and seeding knobs, passed in explicitly
//! - [`random`]: stateless seeded pseudo-random functions
//! - [`generator`]: template-based synthetic copy
//! - [`SimulatedBackend`]: the job store itself

mod backend;
mod config;
pub mod generator;
pub mod random;

pub use backend::{SIMULATED_FAILURE_MESSAGE, SimulatedBackend};
pub use config::{DEFAULT_JOB_TTL, SimulationConfig};
