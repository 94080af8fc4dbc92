//! Resume submission workflow.
//!
//! [`SubmissionState`] is the state machine for one submission lifecycle:
//!
//! ```text
//!            select file / toggle consent
//!               ┌──────────┐
//!               ▼          │
//!  ┌──────┐  submit   ┌────────────┐   Ok    ┌───────────┐
//!  │ Idle │──────────▶│ Submitting │────────▶│ Succeeded │
//!  └──────┘           └────────────┘         └───────────┘
//!     ▲  ▲                  │ Err                  │
//!     │  │                  ▼                      │
//!     │  │  select file ┌────────┐   select file   │
//!     │  └──────────────│ Failed │                 │
//!     └─────────────────┴────────┴─────────────────┘
//! ```
//!
//! Failed and Succeeded can also submit again directly.
//!
//! [`UploadWorkflow`] is the controller owning that state for a mounted
//! component. It hands out submission futures tagged with an
//! [`AttemptToken`]; an outcome is applied only if the session is still
//! mounted and the token still matches.

use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};

use crate::services::SubmissionClient;
use crate::types::{AnalysisResult, FileHandle, FileKind, SubmissionResult};
use crate::view_model::{render, WorkflowView};

// =============================================================================
// State machine
// =============================================================================

/// Identifies one submission attempt within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptToken(pub(crate) u64);

/// Lifecycle stage of the current attempt.
///
/// The result and the error message live inside their phase, so they can
/// never coexist.
#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Submitting(AttemptToken),
    Succeeded(AnalysisResult),
    Failed(String),
}

impl Phase {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Submitting(_) => "Submitting",
            Phase::Succeeded(_) => "Succeeded",
            Phase::Failed(_) => "Failed",
        }
    }
}

/// State of the resume form and of the current submission attempt.
#[derive(Clone, Debug)]
pub struct SubmissionState<F> {
    selected_file: Option<F>,
    file_kind: Option<FileKind>,
    consent_given: bool,
    phase: Phase,
}

impl<F> Default for SubmissionState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            file_kind: None,
            consent_given: false,
            phase: Phase::Idle,
        }
    }
}

impl<F: FileHandle> SubmissionState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn file_kind(&self) -> Option<FileKind> {
        self.file_kind
    }

    pub fn consent_given(&self) -> bool {
        self.consent_given
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            Phase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && self.consent_given && !self.is_submitting()
    }

    /// Record the picker's output.
    ///
    /// `None` means the user cancelled the picker; the current selection is
    /// kept. A new file drops any previous result or error. While a
    /// submission is in flight the phase is left alone: the request already
    /// owns its own copy of the file.
    ///
    /// Returns `true` if the selection changed.
    pub fn select_file(&mut self, file: Option<F>) -> bool {
        let Some(file) = file else {
            return false;
        };

        self.file_kind = Some(FileKind::from_file_name(&file.name()));
        self.selected_file = Some(file);
        if matches!(self.phase, Phase::Succeeded(_) | Phase::Failed(_)) {
            self.phase = Phase::Idle;
        }
        true
    }

    pub fn set_consent(&mut self, given: bool) {
        self.consent_given = given;
    }

    /// Enter `Submitting` under `token`.
    ///
    /// Returns the file to send, or `None` (and changes nothing) when the
    /// submit guard does not hold.
    pub fn begin_submission(&mut self, token: AttemptToken) -> Option<F>
    where
        F: Clone,
    {
        if !self.can_submit() {
            return None;
        }

        let file = self.selected_file.clone()?;
        self.phase = Phase::Submitting(token);
        Some(file)
    }

    /// Apply the outcome of attempt `token`.
    ///
    /// Ignored (returns `false`) unless that attempt is the one in flight.
    pub fn settle(&mut self, token: AttemptToken, outcome: SubmissionResult<AnalysisResult>) -> bool {
        if self.phase != Phase::Submitting(token) {
            return false;
        }

        self.phase = match outcome {
            Ok(result) => Phase::Succeeded(result),
            Err(error) => Phase::Failed(error.user_message().to_string()),
        };
        true
    }
}

// =============================================================================
// Controller
// =============================================================================

type Observer = Rc<dyn Fn(WorkflowView)>;

struct Session<F> {
    state: SubmissionState<F>,
    next_attempt: u64,
    observer: Option<Observer>,
}

type SharedSession<F> = Rc<RefCell<Option<Session<F>>>>;

/// Owns the [`SubmissionState`] of one mounted upload form.
///
/// Cloning yields another handle to the same session. After
/// [`unmount`](Self::unmount) every operation is a no-op and pending
/// submissions drop their outcome.
pub struct UploadWorkflow<F, C> {
    session: SharedSession<F>,
    client: Rc<C>,
}

impl<F, C> Clone for UploadWorkflow<F, C> {
    fn clone(&self) -> Self {
        Self {
            session: Rc::clone(&self.session),
            client: Rc::clone(&self.client),
        }
    }
}

impl<F, C> UploadWorkflow<F, C>
where
    F: FileHandle + Clone + 'static,
    C: SubmissionClient<F> + 'static,
{
    /// Start a session in `Idle` with nothing selected.
    pub fn mount(client: C) -> Self {
        Self {
            session: Rc::new(RefCell::new(Some(Session {
                state: SubmissionState::new(),
                next_attempt: 0,
                observer: None,
            }))),
            client: Rc::new(client),
        }
    }

    /// Register the callback receiving a fresh view after each transition.
    pub fn observe(&self, observer: impl Fn(WorkflowView) + 'static) {
        if let Some(session) = self.session.borrow_mut().as_mut() {
            session.observer = Some(Rc::new(observer));
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// Current view, or `None` once unmounted.
    pub fn view(&self) -> Option<WorkflowView> {
        self.with_state(render)
    }

    /// Read the current state, or `None` once unmounted.
    pub fn with_state<R>(&self, f: impl FnOnce(&SubmissionState<F>) -> R) -> Option<R> {
        self.session.borrow().as_ref().map(|session| f(&session.state))
    }

    pub fn select_file(&self, file: Option<F>) {
        self.transition(|state| {
            let name = file.as_ref().map(FileHandle::name);
            let changed = state.select_file(file);
            if let (true, Some(name)) = (changed, name) {
                log::info!("📄 Selected {} ({})", name, state.file_kind().unwrap_or(FileKind::Unknown));
            }
            changed
        });
    }

    pub fn set_consent(&self, given: bool) {
        self.transition(|state| {
            state.set_consent(given);
            true
        });
    }

    /// Enter `Submitting` and return the task performing the request.
    ///
    /// Returns `None` when the submit guard does not hold. The caller drives
    /// the task (`spawn_local` in the browser); it settles the state exactly
    /// once, unless the session was unmounted in the meantime.
    pub fn submit(&self) -> Option<impl Future<Output = ()> + 'static> {
        let (token, file) = {
            let mut guard = self.session.borrow_mut();
            let session = guard.as_mut()?;
            let token = AttemptToken(session.next_attempt);
            let file = session.state.begin_submission(token)?;
            session.next_attempt += 1;
            (token, file)
        };
        log::info!("📤 Submitting {} for analysis", file.name());
        self.notify();

        let session = Rc::downgrade(&self.session);
        let client = Rc::clone(&self.client);
        Some(async move {
            let outcome = client.submit(&file).await;
            Self::settle(&session, token, outcome);
        })
    }

    /// End the session. Outcomes still in flight will be discarded.
    pub fn unmount(&self) {
        if self.session.borrow_mut().take().is_some() {
            log::debug!("Upload workflow unmounted");
        }
    }

    fn settle(session: &Weak<RefCell<Option<Session<F>>>>, token: AttemptToken, outcome: SubmissionResult<AnalysisResult>) {
        match &outcome {
            Ok(result) => log::info!(
                "✅ Analysis received: score {}, {} matching jobs",
                result.score,
                result.matching_jobs.len()
            ),
            Err(error) => log::error!("❌ Resume submission failed: {}", error),
        }

        let Some(session) = session.upgrade() else {
            log::warn!("⚠️ Discarding submission outcome: workflow dropped");
            return;
        };

        let update = {
            let mut guard = session.borrow_mut();
            let Some(active) = guard.as_mut() else {
                log::warn!("⚠️ Discarding submission outcome: workflow unmounted");
                return;
            };
            if !active.state.settle(token, outcome) {
                log::warn!("⚠️ Discarding outcome of stale attempt {:?}", token);
                return;
            }
            (render(&active.state), active.observer.clone())
        };

        if let (view, Some(observer)) = update {
            observer(view);
        }
    }

    /// Run `change` on the live state and notify the observer if it reports
    /// a change.
    fn transition(&self, change: impl FnOnce(&mut SubmissionState<F>) -> bool) {
        let changed = match self.session.borrow_mut().as_mut() {
            Some(session) => change(&mut session.state),
            None => false,
        };
        if changed {
            self.notify();
        }
    }

    /// Push the current view to the observer. The borrow is released before
    /// the observer runs.
    fn notify(&self) {
        let update = self
            .session
            .borrow()
            .as_ref()
            .and_then(|session| Some((render(&session.state), session.observer.clone()?)));

        if let Some((view, observer)) = update {
            observer(view);
        }
    }
}
