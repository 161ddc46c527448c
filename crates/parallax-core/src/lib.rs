//! Platform-independent core of the parallax controller.
//!
//! Nothing here touches a browser API. The pipeline (options, layer
//! parameters, calibration, input normalization, transform math, scheduling
//! and permission contracts) is written against the capability traits in
//! [`element`], which the web front end implements for DOM elements.

pub mod calibration;
pub mod constants;
pub mod element;
pub mod error;
pub mod input;
pub mod layer;
pub mod options;
pub mod permission;
pub mod registry;
pub mod schedule;
pub mod sizing;
pub mod state;
pub mod transform;

pub use calibration::*;
pub use constants::*;
pub use element::*;
pub use error::ParallaxError;
pub use input::*;
pub use layer::*;
pub use options::*;
pub use permission::*;
pub use registry::*;
pub use schedule::*;
pub use sizing::*;
pub use state::*;
pub use transform::*;
