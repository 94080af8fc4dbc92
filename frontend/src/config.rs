//! Application configuration.
//!
//! Centralized configuration for the ResuMaitcher frontend.
//! Values are compile-time constants; the backend URL can be overridden
//! at build time with the `RESUMAITCHER_BACKEND_URL` environment variable.

/// Analysis service base URL.
pub const BACKEND_URL: &str = match option_env!("RESUMAITCHER_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Path of the resume analysis endpoint, relative to [`BACKEND_URL`].
pub const PROCESS_RESUME_PATH: &str = "/process_resume";

/// Multipart field carrying the raw resume bytes.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Advisory `accept` filter for the file picker.
///
/// The browser does not enforce this; the server decides what it accepts.
pub const ACCEPTED_FILE_TYPES: &str = ".pdf,.docx,.txt";

/// Time allowed for one submission before it counts as a transport failure.
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Application name, used for the document title and header logo.
pub const APP_NAME: &str = "ResuMaitcher";

/// The only failure text ever shown to the user.
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred while processing your resume. Please try again.";

/// Submit button caption while idle.
pub const SUBMIT_CAPTION: &str = "Analyze Resume";

/// Submit button caption while a submission is in flight.
pub const PROCESSING_CAPTION: &str = "Processing...";

/// File input label when nothing has been picked yet.
pub const NO_FILE_LABEL: &str = "Choose file";
