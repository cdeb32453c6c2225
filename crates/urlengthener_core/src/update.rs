use lengthen_logging::{lengthen_debug, lengthen_info, lengthen_warn};

use crate::{AppState, Completion, Effect, Msg, SessionState, NETWORK_ERROR_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(url) => {
            state.inputs_mut().url = url;
            Vec::new()
        }
        Msg::DelayChanged(delay) => {
            state.inputs_mut().delay = delay;
            Vec::new()
        }
        Msg::DurationChanged(duration) => {
            state.inputs_mut().duration = duration;
            Vec::new()
        }
        Msg::SubmitClicked => match state.session() {
            SessionState::Idle => {
                let (request_id, params) = state.begin_request();
                let path_and_query = params.path_and_query();
                lengthen_info!(
                    "Submit request_id={} url_len={} delay={:?} duration={:?}",
                    request_id,
                    params.url.len(),
                    params.delay,
                    params.duration
                );
                vec![Effect::Lengthen {
                    request_id,
                    path_and_query,
                }]
            }
            SessionState::Pending => {
                // At most one request in flight; the busy UI should not
                // have let this through.
                lengthen_debug!(
                    "Submit ignored, request {:?} still pending",
                    state.in_flight()
                );
                Vec::new()
            }
            SessionState::Completed => {
                state.reset();
                lengthen_info!("Reset to idle");
                Vec::new()
            }
        },
        Msg::ResetRequested => {
            if state.session() == SessionState::Completed {
                state.reset();
                lengthen_info!("Reset to idle");
            }
            Vec::new()
        }
        Msg::LengthenCompleted {
            request_id,
            completion,
        } => {
            if state.session() != SessionState::Pending || state.in_flight() != Some(request_id) {
                lengthen_warn!(
                    "Ignoring completion for request {} (in flight: {:?})",
                    request_id,
                    state.in_flight()
                );
                return (state, Vec::new());
            }
            match completion {
                Completion::Success { body } => {
                    state.complete(&body);
                    lengthen_info!("Request {} completed: {}", request_id, state.output());
                    Vec::new()
                }
                Completion::ApplicationError { code } => {
                    state.fail();
                    lengthen_warn!("Request {} failed with status {}", request_id, code);
                    vec![Effect::Alert(format!("status code: {code}"))]
                }
                Completion::TransportError => {
                    state.fail();
                    lengthen_warn!("Request {} failed: {}", request_id, NETWORK_ERROR_MESSAGE);
                    vec![Effect::Alert(NETWORK_ERROR_MESSAGE.to_string())]
                }
            }
        }
    };

    (state, effects)
}
