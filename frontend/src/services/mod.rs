//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - resume upload to the analysis backend
//! - [`health`] - backend liveness check

pub mod upload;
pub mod health;

pub use upload::*;
pub use health::*;
