//! urlengthener core: pure controller state machine and view-model helpers.
mod effect;
mod msg;
mod request;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Completion, Msg};
pub use request::{encode_uri_component, SubmissionParams, LENGTHENED_PREFIX, LENGTHEN_PATH};
pub use state::{AppState, RequestId, SessionState};
pub use update::update;
pub use view_model::{AppViewModel, DO_ANOTHER_LABEL, NETWORK_ERROR_MESSAGE, SHORTEN_LABEL};
