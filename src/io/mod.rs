//! Export of generated datasets (CSV) and ground truth (JSON).

pub mod export;
pub mod truth;
