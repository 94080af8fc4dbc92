//! Resume upload form.
//!
//! Wires the browser controls to an [`UploadWorkflow`]; the markup only reads
//! the [`WorkflowView`] pushed by the workflow after each transition.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use crate::components::AnalysisResultPanel;
use crate::services::HttpSubmissionClient;
use crate::view_model::{Panel, WorkflowView};
use crate::workflow::UploadWorkflow;
use crate::ACCEPTED_FILE_TYPES;

type BrowserWorkflow = UploadWorkflow<File, HttpSubmissionClient>;

#[component]
pub fn ResumeUpload() -> impl IntoView {
    let workflow: BrowserWorkflow = UploadWorkflow::mount(HttpSubmissionClient::default());
    let (view_state, set_view_state) = create_signal(workflow.view().unwrap_or_default());
    workflow.observe(move |view| set_view_state.set(view));

    // Late submission outcomes must not touch a page that is gone
    on_cleanup({
        let workflow = workflow.clone();
        move || workflow.unmount()
    });

    let on_file_change = {
        let workflow = workflow.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            let file = input.files().and_then(|files| files.get(0));
            workflow.select_file(file);
        }
    };

    let on_consent_change = {
        let workflow = workflow.clone();
        move |ev: Event| workflow.set_consent(event_target_checked(&ev))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(task) = workflow.submit() {
            spawn_local(task);
        }
    };

    let form = move || view_state.with(|v: &WorkflowView| v.form.clone());

    view! {
        <div class="resume-upload">
            <h2>"Upload Your Resume"</h2>
            <PrivacyNotice/>

            <form on:submit=on_submit>
                <div class="file-input">
                    <input
                        type="file"
                        id="file-upload"
                        accept=ACCEPTED_FILE_TYPES
                        required
                        on:change=on_file_change
                    />
                    <label for="file-upload" class="file-label">
                        {move || form().file_label}
                    </label>
                    {move || form().file_kind.map(|kind| view! {
                        <span class="file-kind">{kind.label()}</span>
                    })}
                </div>

                <div class="privacy-agreement">
                    <input
                        type="checkbox"
                        id="privacy-checkbox"
                        prop:checked=move || form().consent_given
                        on:change=on_consent_change
                        required
                    />
                    <label for="privacy-checkbox">"I have read and agree to the privacy policy"</label>
                </div>

                <button type="submit" disabled=move || !form().submit_enabled>
                    {move || form().submit_caption}
                </button>
            </form>

            {move || match view_state.with(|v| v.panel.clone()) {
                Panel::Empty => ().into_view(),
                Panel::Loading => view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        <p>"Analyzing your resume..."</p>
                    </div>
                }.into_view(),
                Panel::Result(result) => view! { <AnalysisResultPanel result=result/> }.into_view(),
                Panel::Error(message) => view! {
                    <div class="error-message">{message}</div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn PrivacyNotice() -> impl IntoView {
    view! {
        <div class="privacy-notice">
            <h3>"Privacy Policy"</h3>
            <p>
                "We prioritize your privacy. Your resume will be processed in-memory only, "
                "will not be stored persistently, and will be deleted immediately after analysis. "
                "We do not share your data with any third parties."
            </p>
        </div>
    }
}
