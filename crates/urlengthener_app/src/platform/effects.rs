use std::sync::{mpsc, Arc};

use lengthen_logging::{lengthen_info, lengthen_warn};
use urlengthener_core::{Completion, Effect, Msg};
use urlengthener_engine::{
    CompletionSink, EngineEvent, EngineHandle, FailureKind, FetchError, TransportSettings,
};

use super::app::AppEvent;
use super::ui::UiSink;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        origin: &str,
        settings: TransportSettings,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Result<Self, FetchError> {
        let engine = EngineHandle::new(origin, settings, Arc::new(MsgSink { tx: event_tx }))?;
        Ok(Self { engine })
    }

    #[cfg(test)]
    pub fn with_transport(
        transport: Arc<dyn urlengthener_engine::Transport>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        let engine = EngineHandle::with_transport(transport, Arc::new(MsgSink { tx: event_tx }));
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>, ui: &mut dyn UiSink) {
        for effect in effects {
            match effect {
                Effect::Lengthen {
                    request_id,
                    path_and_query,
                } => {
                    lengthen_info!("Lengthen request_id={} path={}", request_id, path_and_query);
                    self.engine.submit(request_id, path_and_query);
                }
                Effect::Alert(message) => ui.alert(&message),
            }
        }
    }
}

/// Feeds engine completions back into the event loop as messages.
struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl CompletionSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::Completed { request_id, result } => {
                if let Err(err) = &result {
                    lengthen_warn!("Request {} failed: {}", request_id, err);
                }
                Msg::LengthenCompleted {
                    request_id,
                    completion: map_completion(result),
                }
            }
        };
        let _ = self.tx.send(AppEvent::Msg(msg));
    }
}

pub(crate) fn map_completion(result: Result<String, FetchError>) -> Completion {
    match result {
        Ok(body) => Completion::Success { body },
        Err(FetchError {
            kind: FailureKind::HttpStatus(code),
            ..
        }) => Completion::ApplicationError { code },
        Err(FetchError {
            kind: FailureKind::Network | FailureKind::InvalidUrl,
            ..
        }) => Completion::TransportError,
    }
}
