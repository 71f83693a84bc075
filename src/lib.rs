//! premium-rs: health-insurance premium estimation core.
//!
//! This crate implements the input-to-prediction pipeline behind a premium
//! estimator form: validating and encoding raw demographic, financial, and
//! health fields into the fixed-order feature vector a trained regression
//! model expects, scoring that vector with a model loaded once per process,
//! and formatting the result for display.

pub mod artifact;
pub mod encode;
pub mod format;
pub mod input;
pub mod model;
pub mod schema;
pub mod service;
