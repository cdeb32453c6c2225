#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the target URL input.
    UrlChanged(String),
    /// User edited the delay input (seconds, forwarded verbatim).
    DelayChanged(String),
    /// User edited the expiration input (seconds, forwarded verbatim).
    DurationChanged(String),
    /// User pressed the submit button ("Shorten" or "Do Another").
    SubmitClicked,
    /// Explicit "do another": clears a completed result, never submits.
    ResetRequested,
    /// Transport finished the request identified by `request_id`.
    LengthenCompleted {
        request_id: crate::RequestId,
        completion: Completion,
    },
}

/// Outcome of one lengthen request. Exactly one is delivered per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Status 200; `body` is the short code.
    Success { body: String },
    /// The service answered with any status other than 200.
    ApplicationError { code: u16 },
    /// The request never produced a response.
    TransportError,
}
