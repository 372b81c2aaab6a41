//! Purchase decision scoring.
//!
//! [`scoring`] holds the pure PDS engine; [`analysis`] layers the optional
//! remote analyzer on top of it and falls back to the engine when the remote
//! side is unavailable.

pub mod analysis;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
