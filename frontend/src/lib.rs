//! ResuMaitcher - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for submitting a resume to the analysis
//! service and reviewing the returned score, extracted information,
//! suggestions and matching jobs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation)                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /        LandingPage                                    │
//! │  └── /upload  ResumeUpload ──▶ UploadWorkflow ──▶ service   │
//! │               └── AnalysisResultPanel                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Analysis payload, file kinds, errors
//! - [`workflow`] - Submission state machine and its controller
//! - [`view_model`] - Pure state-to-view mapping
//! - [`components`] - UI components
//! - [`services`] - Analysis service client

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod workflow;
pub mod view_model;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Analysis
    AnalysisResult, Analysis, StructuredInfo, MatchingJob,
    // Files
    FileHandle, FileKind,
    // Errors
    SubmissionError, SubmissionResult,
};

// Workflow
pub use workflow::{AttemptToken, Phase, SubmissionState, UploadWorkflow};
pub use view_model::{render, Panel, WorkflowView};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <div class="App">
                <Header/>
                <main>
                    <Routes>
                        <Route path="/" view=LandingPage/>
                        <Route path="/upload" view=ResumeUpload/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
