//! # veracity-observability
//!
//! Tracing initialization and per-operation spans. The core crates emit
//! `tracing` events; this crate gives the pipeline coordinator one place to
//! install a subscriber and consistent span names to wrap operations in.

pub mod tracing_setup;

pub use tracing_setup::init_tracing;
