//! CLI library components for the animal dataset normalizer.

pub mod logging;
pub mod pipeline;
