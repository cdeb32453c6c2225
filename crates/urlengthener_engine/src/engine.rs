use std::sync::{mpsc, Arc};
use std::thread;

use lengthen_logging::{lengthen_error, lengthen_info, lengthen_warn};

use crate::transport::{ReqwestTransport, Transport, TransportSettings};
use crate::{EngineEvent, FailureKind, FetchError, RequestId};

/// Receives engine events. Called from the engine's runtime threads.
pub trait CompletionSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelCompletionSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelCompletionSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl CompletionSink for ChannelCompletionSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Lengthen {
        request_id: RequestId,
        path_and_query: String,
    },
}

/// Handle to the background request executor.
///
/// `submit` never blocks: the request runs on a tokio runtime owned by a
/// dedicated thread, and its completion is reported through the sink.
/// Every submitted request gets exactly one completion, including when the
/// executor is gone or the transport panics.
/// Dropping the handle stops the executor and abandons in-flight requests.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    sink: Arc<dyn CompletionSink>,
}

impl EngineHandle {
    pub fn new(
        origin: &str,
        settings: TransportSettings,
        sink: Arc<dyn CompletionSink>,
    ) -> Result<Self, FetchError> {
        let transport = ReqwestTransport::new(origin, settings)?;
        lengthen_info!("Engine targeting {}", transport.origin());
        Ok(Self::with_transport(Arc::new(transport), sink))
    }

    pub fn with_transport(transport: Arc<dyn Transport>, sink: Arc<dyn CompletionSink>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let worker_sink = sink.clone();

        thread::spawn(move || {
            let sink = worker_sink;
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    lengthen_error!("Failed to start engine runtime: {}", err);
                    fail_all(cmd_rx, sink.as_ref(), &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                runtime.spawn(handle_command(transport.clone(), command, sink.clone()));
            }
        });

        Self { cmd_tx, sink }
    }

    pub fn submit(&self, request_id: RequestId, path_and_query: impl Into<String>) {
        let command = EngineCommand::Lengthen {
            request_id,
            path_and_query: path_and_query.into(),
        };
        if self.cmd_tx.send(command).is_err() {
            lengthen_warn!("Engine stopped; request {} failed", request_id);
            self.sink.emit(EngineEvent::Completed {
                request_id,
                result: Err(FetchError::new(FailureKind::Network, "engine stopped")),
            });
        }
    }
}

async fn handle_command(
    transport: Arc<dyn Transport>,
    command: EngineCommand,
    sink: Arc<dyn CompletionSink>,
) {
    match command {
        EngineCommand::Lengthen {
            request_id,
            path_and_query,
        } => {
            // The transport runs in its own task so a panic surfaces as a
            // join error instead of a lost completion.
            let request = tokio::spawn(async move { transport.lengthen(&path_and_query).await });
            let result = match request.await {
                Ok(result) => result,
                Err(err) => {
                    lengthen_error!("Request {} task failed: {}", request_id, err);
                    Err(FetchError::new(FailureKind::Network, err.to_string()))
                }
            };
            sink.emit(EngineEvent::Completed { request_id, result });
        }
    }
}

/// Without a runtime nothing can reach the network; every request still
/// gets its one completion.
fn fail_all(cmd_rx: mpsc::Receiver<EngineCommand>, sink: &dyn CompletionSink, reason: &str) {
    while let Ok(EngineCommand::Lengthen { request_id, .. }) = cmd_rx.recv() {
        sink.emit(EngineEvent::Completed {
            request_id,
            result: Err(FetchError::new(FailureKind::Network, reason)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_after_engine_stopped_still_completes() {
        let (event_tx, event_rx) = mpsc::channel();
        let (cmd_tx, cmd_rx) = mpsc::channel();
        drop(cmd_rx);
        let engine = EngineHandle {
            cmd_tx,
            sink: Arc::new(ChannelCompletionSink::new(event_tx)),
        };

        engine.submit(3, "/lengthen?url=a&delay=&duration=");

        match event_rx.try_recv().expect("completion emitted") {
            EngineEvent::Completed { request_id, result } => {
                assert_eq!(request_id, 3);
                assert_eq!(result.unwrap_err().kind, FailureKind::Network);
            }
        }
        assert!(event_rx.try_recv().is_err());
    }
}
