//! Data Transfer Objects
//!
//! Wire shapes for the job endpoints and for each long-running operation.
//! Field names are camelCase on the wire.

pub mod briefing;
pub mod job;
pub mod variants;
