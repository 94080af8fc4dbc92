//! View model for the upload page.
//!
//! [`render`] turns a [`SubmissionState`] into plain display data. Components
//! only ever read a [`WorkflowView`]; they never look at the state itself.

use crate::config::{NO_FILE_LABEL, PROCESSING_CAPTION, SUBMIT_CAPTION};
use crate::types::{AnalysisResult, FileHandle, FileKind, MatchingJob};
use crate::workflow::{Phase, SubmissionState};

/// Everything the upload page displays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkflowView {
    pub form: FormView,
    pub panel: Panel,
}

/// The resume form controls.
#[derive(Clone, Debug, PartialEq)]
pub struct FormView {
    /// Selected file name, or the "choose" prompt
    pub file_label: String,
    pub file_kind: Option<FileKind>,
    pub consent_given: bool,
    pub submit_enabled: bool,
    pub submit_caption: &'static str,
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            file_label: NO_FILE_LABEL.to_string(),
            file_kind: None,
            consent_given: false,
            submit_enabled: false,
            submit_caption: SUBMIT_CAPTION,
        }
    }
}

/// What is shown below the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Panel {
    #[default]
    Empty,
    Loading,
    Result(ResultView),
    Error(String),
}

/// A successful analysis, ready for display.
///
/// Lists keep the service order. Empty lists stay empty rather than being
/// dropped, so every section is always rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub score: String,
    pub important_terms: Vec<String>,
    pub key_phrases: Vec<String>,
    pub entities: Vec<(String, String)>,
    pub sections: Vec<Section>,
    pub suggestions: Vec<String>,
    pub jobs: Vec<JobView>,
}

/// One labeled list of `structured_info`.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub label: &'static str,
    pub items: Vec<String>,
}

/// One matching job line.
#[derive(Clone, Debug, PartialEq)]
pub struct JobView {
    /// "{title} at {company}"
    pub headline: String,
    /// "85% match"
    pub match_score: String,
    /// "4 skills matched"
    pub skills_matched: String,
    /// "Yes" / "No"
    pub experience_match: &'static str,
    pub link: String,
}

/// Build the view for `state`.
pub fn render<F: FileHandle>(state: &SubmissionState<F>) -> WorkflowView {
    let form = FormView {
        file_label: state
            .selected_file()
            .map(FileHandle::name)
            .unwrap_or_else(|| NO_FILE_LABEL.to_string()),
        file_kind: state.file_kind(),
        consent_given: state.consent_given(),
        submit_enabled: state.can_submit(),
        submit_caption: if state.is_submitting() {
            PROCESSING_CAPTION
        } else {
            SUBMIT_CAPTION
        },
    };

    let panel = match state.phase() {
        Phase::Idle => Panel::Empty,
        Phase::Submitting(_) => Panel::Loading,
        Phase::Succeeded(result) => Panel::Result(ResultView::from(result)),
        Phase::Failed(message) => Panel::Error(message.clone()),
    };

    WorkflowView { form, panel }
}

impl From<&AnalysisResult> for ResultView {
    fn from(result: &AnalysisResult) -> Self {
        let analysis = &result.analysis;
        let info = &analysis.structured_info;

        Self {
            score: format_number(result.score),
            important_terms: analysis.important_terms.clone(),
            key_phrases: analysis.key_phrases.clone(),
            entities: analysis
                .entities
                .iter()
                .map(|(text, label)| (text.clone(), label.clone()))
                .collect(),
            sections: vec![
                Section { label: "Work Experience", items: info.work_experience.clone() },
                Section { label: "Education", items: info.education.clone() },
                Section { label: "Skills", items: info.skills.clone() },
            ],
            suggestions: result.suggestions.clone(),
            jobs: result.matching_jobs.iter().map(JobView::from).collect(),
        }
    }
}

impl From<&MatchingJob> for JobView {
    fn from(job: &MatchingJob) -> Self {
        let skills = format_number(job.skill_match);
        let noun = if job.skill_match == 1.0 { "skill" } else { "skills" };

        Self {
            headline: format!("{} at {}", job.title, job.company),
            match_score: format!("{}% match", format_number(job.match_score)),
            skills_matched: format!("{} {} matched", skills, noun),
            experience_match: if job.experience_match { "Yes" } else { "No" },
            link: job.job_link.clone(),
        }
    }
}

/// Integral values print without a fractional part, others with one decimal.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
