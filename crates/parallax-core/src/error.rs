use thiserror::Error;

/// Errors surfaced by the parallax pipeline.
///
/// Only construction can fail hard; everything at event time is logged and
/// skipped instead.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParallaxError {
    #[error("parallax container #{0} not found")]
    ContainerNotFound(String),

    #[error("invalid option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("dom error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, ParallaxError>;
