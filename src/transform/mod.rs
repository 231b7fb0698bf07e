//! Pure signal transforms: carryover, saturation, and max-abs scaling.

pub mod adstock;
pub mod saturation;
pub mod scale;

pub use adstock::*;
pub use saturation::*;
pub use scale::*;
