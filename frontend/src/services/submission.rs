//! HTTP client for the resume analysis service.
//!
//! Sends the selected file as multipart field `file` to
//! `POST {BACKEND_URL}/process_resume` and turns whatever comes back into an
//! [`AnalysisResult`] or a [`SubmissionError`].

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{File, FormData};

use crate::config::{BACKEND_URL, PROCESS_RESUME_PATH, REQUEST_TIMEOUT_MS, UPLOAD_FIELD_NAME};
use crate::types::{AnalysisResult, FileHandle, SubmissionError, SubmissionResult};

/// Performs the network exchange for one submission.
///
/// Implementations resolve exactly once, with either a validated result or
/// an error.
#[allow(async_fn_in_trait)]
pub trait SubmissionClient<F: FileHandle> {
    async fn submit(&self, file: &F) -> SubmissionResult<AnalysisResult>;
}

impl FileHandle for File {
    fn name(&self) -> String {
        File::name(self)
    }
}

/// [`SubmissionClient`] backed by `fetch`.
#[derive(Clone, Debug)]
pub struct HttpSubmissionClient {
    base_url: String,
    timeout_ms: u32,
}

impl Default for HttpSubmissionClient {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl HttpSubmissionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Full URL of the analysis endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PROCESS_RESUME_PATH)
    }
}

impl SubmissionClient<File> for HttpSubmissionClient {
    async fn submit(&self, file: &File) -> SubmissionResult<AnalysisResult> {
        let form_data = FormData::new()
            .map_err(|e| SubmissionError::Request(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob(UPLOAD_FIELD_NAME, file)
            .map_err(|e| SubmissionError::Request(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(&self.endpoint())
            .body(form_data)
            .map_err(|e| SubmissionError::Request(e.to_string()))?;

        let send = Box::pin(request.send());
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));
        let response = match select(send, timeout).await {
            Either::Left((response, _)) => response.map_err(|e| SubmissionError::Network(e.to_string()))?,
            Either::Right(_) => return Err(SubmissionError::Timeout(self.timeout_ms)),
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        interpret_response(status, &body)
    }
}

/// Turn a raw HTTP exchange into a submission outcome.
///
/// Any non-2xx status fails regardless of the body.
pub fn interpret_response(status: u16, body: &str) -> SubmissionResult<AnalysisResult> {
    if !(200..300).contains(&status) {
        return Err(SubmissionError::Status {
            status,
            body: body.to_string(),
        });
    }

    parse_analysis(body)
}

/// Validate and decode an analysis payload.
pub fn parse_analysis(body: &str) -> SubmissionResult<AnalysisResult> {
    serde_json::from_str(body).map_err(|e| SubmissionError::Payload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GENERIC_ERROR_MESSAGE;

    const VALID: &str = r#"{
        "score": 72,
        "analysis": {
            "important_terms": ["python", "aws"],
            "key_phrases": ["cloud migration"],
            "entities": {"Jane Doe": "PERSON", "Acme": "ORG"},
            "structured_info": {
                "work_experience": ["Acme - Backend Engineer"],
                "education": ["MSc Informatics"],
                "skills": ["Python", "AWS"]
            }
        },
        "suggestions": ["Add metrics"],
        "matching_jobs": [
            {
                "title": "Engineer",
                "company": "Acme",
                "match_score": 85,
                "skill_match": 4,
                "experience_match": true,
                "job_link": "https://x"
            }
        ],
        "processing_time_ms": 412
    }"#;

    #[test]
    fn test_response_deserialization() {
        let result = parse_analysis(VALID).expect("valid payload");

        assert_eq!(result.score, 72.0);
        assert_eq!(result.analysis.important_terms, vec!["python", "aws"]);
        assert_eq!(result.analysis.entities.get("Acme").map(String::as_str), Some("ORG"));
        assert_eq!(result.analysis.structured_info.skills, vec!["Python", "AWS"]);
        assert_eq!(result.suggestions, vec!["Add metrics"]);
        assert_eq!(result.matching_jobs[0].company, "Acme");
        assert!(result.matching_jobs[0].experience_match);
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        // Shape of the old placeholder service: no analysis, partial jobs.
        let legacy = r#"{
            "score": 75,
            "suggestions": ["Quantify your achievements"],
            "matching_jobs": [{"title": "Software Developer", "company": "Tech Corp", "match_score": 85}]
        }"#;

        let error = parse_analysis(legacy).unwrap_err();
        assert!(matches!(error, SubmissionError::Payload(_)));
        assert_eq!(error.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let body = VALID.replace(r#""experience_match": true"#, r#""experience_match": "yes""#);
        assert!(matches!(parse_analysis(&body), Err(SubmissionError::Payload(_))));

        assert!(matches!(parse_analysis("not json"), Err(SubmissionError::Payload(_))));
        assert!(matches!(parse_analysis(""), Err(SubmissionError::Payload(_))));
    }

    #[test]
    fn test_non_success_status_fails_even_with_valid_body() {
        for status in [400, 404, 500, 503] {
            let error = interpret_response(status, VALID).unwrap_err();
            assert_eq!(error, SubmissionError::Status { status, body: VALID.to_string() });
            assert_eq!(error.user_message(), GENERIC_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_success_status_parses_body() {
        assert!(interpret_response(200, VALID).is_ok());
        assert!(interpret_response(201, VALID).is_ok());
        assert!(matches!(
            interpret_response(200, r#"{"error": "No file part"}"#),
            Err(SubmissionError::Payload(_))
        ));
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            HttpSubmissionClient::new("http://localhost:5000").endpoint(),
            "http://localhost:5000/process_resume"
        );
        assert_eq!(
            HttpSubmissionClient::new("https://api.example.com/").endpoint(),
            "https://api.example.com/process_resume"
        );
    }

    #[test]
    fn test_default_client_uses_config() {
        let client = HttpSubmissionClient::default().with_timeout(1_000);
        assert_eq!(client.endpoint(), format!("{}{}", BACKEND_URL, PROCESS_RESUME_PATH));
        assert_eq!(client.timeout_ms, 1_000);
    }
}
