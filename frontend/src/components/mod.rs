//! UI Components for the ResuMaitcher application.
//!
//! # Layout Components
//! - [`Header`] - Logo and navigation
//! - [`Footer`] - Page footer
//! - [`LandingPage`] - Hero and feature overview
//!
//! # Feature Components
//! - [`ResumeUpload`] - Resume form, consent gate and submission
//! - [`AnalysisResultPanel`] - Score, extracted content, suggestions and jobs

mod header;
mod footer;
mod landing;
mod upload;
mod results;

pub use header::*;
pub use footer::*;
pub use landing::*;
pub use upload::*;
pub use results::*;
