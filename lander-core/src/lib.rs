//! Lander Core
//!
//! Core types and abstractions shared by the Lander job client, the
//! simulated backend and the command-line tools.
//!
//! This crate contains:
//! - Domain types: the asynchronous `Job` and its status vocabulary
//! - DTOs: wire shapes for job submission and the typed operations
//! - Operations: the `Operation` trait binding a request type to its result type

pub mod domain;
pub mod dto;
pub mod operation;
