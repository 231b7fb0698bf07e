//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input configuration (`Frequency`, `ChannelSpec`, `GenerateConfig`)
//! - generated series bundles (`BaseSeries`, `ChannelSeries`, `GeneratedDataset`)
//! - the exported ground-truth schema (`TruthFile`, `TruthChannel`)

pub mod types;

pub use types::*;
