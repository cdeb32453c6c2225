//! urlengthener engine: HTTP transport and background request execution.
mod engine;
mod transport;
mod types;

pub use engine::{ChannelCompletionSink, CompletionSink, EngineHandle};
pub use transport::{ReqwestTransport, Transport, TransportSettings};
pub use types::{EngineEvent, FailureKind, FetchError, RequestId};
