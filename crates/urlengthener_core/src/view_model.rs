use crate::SessionState;

/// Submit label while a new URL can be shortened (or one is in flight).
pub const SHORTEN_LABEL: &str = "Shorten";
/// Submit label once a result is shown.
pub const DO_ANOTHER_LABEL: &str = "Do Another";
/// Alert text for requests that never produced a response.
pub const NETWORK_ERROR_MESSAGE: &str = "network error";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    /// True while a request is in flight; the submit affordance is disabled.
    pub busy: bool,
    /// The output field: the lengthened URL, or empty.
    pub output: String,
    pub submit_label: &'static str,
    pub url: String,
    pub delay: String,
    pub duration: String,
    pub dirty: bool,
}
