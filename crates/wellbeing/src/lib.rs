//! Wellbeing score aggregation: per-domain normalizers, weight validation,
//! weighted aggregation, and the service/router layer that hosts them.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
