//! Backend services.
//!
//! # Services
//!
//! - [`submission`] - Resume upload to the analysis service

pub mod submission;

pub use submission::*;
