//! CLI library components for the plantation survey validator.

pub mod logging;
pub mod pipeline;
