use crate::request::{SubmissionParams, LENGTHENED_PREFIX};
use crate::view_model::{AppViewModel, DO_ANOTHER_LABEL, SHORTEN_LABEL};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Pending,
    Completed,
}

/// Controller state. Owned by whoever drives `update`, for the lifetime of
/// the UI session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    origin: String,
    session: SessionState,
    inputs: SubmissionParams,
    output: String,
    next_request_id: RequestId,
    in_flight: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    /// `origin` is the scheme/host/port the result URL is built on, e.g.
    /// `https://short.example`. A trailing `/` is dropped.
    pub fn new(origin: impl Into<String>) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self {
            origin,
            next_request_id: 1,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            session: self.session,
            busy: self.session == SessionState::Pending,
            output: self.output.clone(),
            submit_label: match self.session {
                SessionState::Completed => DO_ANOTHER_LABEL,
                SessionState::Idle | SessionState::Pending => SHORTEN_LABEL,
            },
            url: self.inputs.url.clone(),
            delay: self.inputs.delay.clone(),
            duration: self.inputs.duration.clone(),
            dirty: self.dirty,
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Returns whether anything visible changed since the last call, and
    /// clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn inputs_mut(&mut self) -> &mut SubmissionParams {
        self.dirty = true;
        &mut self.inputs
    }

    /// Idle -> Pending. Returns the id and snapshot for the new request.
    pub(crate) fn begin_request(&mut self) -> (RequestId, SubmissionParams) {
        // Default-constructed states start at 0; ids must never repeat.
        let request_id = self.next_request_id.max(1);
        self.next_request_id = request_id + 1;
        self.in_flight = Some(request_id);
        self.session = SessionState::Pending;
        self.dirty = true;
        (request_id, self.inputs.clone())
    }

    /// Pending -> Completed with the result URL in the output field.
    pub(crate) fn complete(&mut self, short_code: &str) {
        self.output = format!("{}{}{}", self.origin, LENGTHENED_PREFIX, short_code);
        self.in_flight = None;
        self.session = SessionState::Completed;
        self.dirty = true;
    }

    /// Pending -> Idle after a failed request. Output is left as it was.
    pub(crate) fn fail(&mut self) {
        self.in_flight = None;
        self.session = SessionState::Idle;
        self.dirty = true;
    }

    /// Completed -> Idle with a fresh URL input. Delay and duration are kept.
    pub(crate) fn reset(&mut self) {
        self.output.clear();
        self.inputs.url.clear();
        self.session = SessionState::Idle;
        self.dirty = true;
    }
}
