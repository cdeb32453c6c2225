use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Path of the shortening endpoint, relative to the origin.
pub const LENGTHEN_PATH: &str = "/lengthen";
/// Prefix joined between the origin and the returned short code.
pub const LENGTHENED_PREFIX: &str = "/lengthened/";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` gets escaped, matching
/// the browser `encodeURIComponent` set.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Snapshot of the three input fields taken when a submission starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionParams {
    pub url: String,
    pub delay: String,
    pub duration: String,
}

impl SubmissionParams {
    pub fn new(
        url: impl Into<String>,
        delay: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            delay: delay.into(),
            duration: duration.into(),
        }
    }

    /// Builds `/lengthen?url=..&delay=..&duration=..`.
    ///
    /// Only `url` is percent-encoded; `delay` and `duration` are passed
    /// through exactly as typed.
    pub fn path_and_query(&self) -> String {
        format!(
            "{}?url={}&delay={}&duration={}",
            LENGTHEN_PATH,
            encode_uri_component(&self.url),
            self.delay,
            self.duration
        )
    }
}

pub fn encode_uri_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}
