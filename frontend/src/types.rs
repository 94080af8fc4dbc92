//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Analysis Types** - Payload returned by the analysis service
//! - **File Types** - Selected file handle and its display kind
//! - **Error Types** - Submission failures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::config::GENERIC_ERROR_MESSAGE;

// =============================================================================
// Analysis Types
// =============================================================================

/// Response from the `/process_resume` endpoint.
///
/// Every field is required: a payload missing any of them is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall resume score
    pub score: f64,
    /// Extracted content
    pub analysis: Analysis,
    /// Improvement suggestions, in service order
    pub suggestions: Vec<String>,
    /// Matching job postings, in service order
    pub matching_jobs: Vec<MatchingJob>,
}

/// Content extracted from the resume by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub important_terms: Vec<String>,
    pub key_phrases: Vec<String>,
    /// Named entities (entity text -> entity label)
    pub entities: BTreeMap<String, String>,
    pub structured_info: StructuredInfo,
}

/// Resume sections recognized by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructuredInfo {
    pub work_experience: Vec<String>,
    pub education: Vec<String>,
    pub skills: Vec<String>,
}

/// A job posting matched against the resume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchingJob {
    pub title: String,
    pub company: String,
    /// Overall match, in percent
    pub match_score: f64,
    /// Number of resume skills found in the posting
    pub skill_match: f64,
    pub experience_match: bool,
    pub job_link: String,
}

// =============================================================================
// File Types
// =============================================================================

/// A user-selected file.
///
/// Only the name is read client-side; the bytes go to the network layer
/// untouched.
pub trait FileHandle {
    fn name(&self) -> String;
}

/// Display kind of a selected file, derived from its extension.
///
/// Informational only: it never decides whether a file may be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Txt,
    Unknown,
}

impl FileKind {
    /// Classify a file name by its extension, ignoring case.
    pub fn from_file_name(name: &str) -> Self {
        let Some((_, extension)) = name.rsplit_once('.') else {
            return FileKind::Unknown;
        };

        match extension.to_ascii_lowercase().as_str() {
            "pdf" => FileKind::Pdf,
            "docx" => FileKind::Docx,
            "txt" => FileKind::Txt,
            _ => FileKind::Unknown,
        }
    }

    /// Badge text for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Docx => "DOCX",
            FileKind::Txt => "TXT",
            FileKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Reasons a submission can fail.
///
/// `Display` carries the technical detail and is meant for the console.
/// The UI only ever shows [`SubmissionError::user_message`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SubmissionError {
    /// The multipart body or the request could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// The service could not be reached.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// No response within the configured delay.
    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    /// The service answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The service answered 2xx but the body is not an analysis result.
    #[error("Failed to parse response: {0}")]
    Payload(String),
}

impl SubmissionError {
    /// Text shown to the user, identical for every failure.
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}

/// Result type alias for submission operations.
pub type SubmissionResult<T> = Result<T, SubmissionError>;
