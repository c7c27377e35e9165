//! Lander Mock Server
//!
//! Serves the simulated backend over the same HTTP contract as the real
//! job server, so browser and CLI clients can run fully offline.

pub mod api;
pub mod config;
