//! imgproc-filter - Neighborhood filters
//!
//! - [`blur`]: square box blur with edge-aware averaging

pub mod blur;
mod error;

pub use blur::{blur, blur_into, blur_pixel};
pub use error::{FilterError, FilterResult};
