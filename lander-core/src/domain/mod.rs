//! Core domain types
//!
//! These types represent the job abstraction exchanged between a job store
//! (real server or simulated backend) and the polling client.

pub mod job;
