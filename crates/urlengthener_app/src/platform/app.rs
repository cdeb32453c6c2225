use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use lengthen_logging::{lengthen_debug, lengthen_info};
use urlengthener_core::{update, AppState, Msg, SessionState};

use super::cli::Args;
use super::effects::EffectRunner;
use super::logging;
use super::ui::command::{parse_line, UiCommand, HELP_TEXT};
use super::ui::{TerminalUi, UiSink};

/// Everything the event loop reacts to, from the terminal or the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Msg(Msg),
    Submit,
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl From<UiCommand> for AppEvent {
    fn from(command: UiCommand) -> Self {
        match command {
            UiCommand::SetUrl(url) => AppEvent::Msg(Msg::UrlChanged(url)),
            UiCommand::SetDelay(delay) => AppEvent::Msg(Msg::DelayChanged(delay)),
            UiCommand::SetDuration(duration) => AppEvent::Msg(Msg::DurationChanged(duration)),
            UiCommand::Submit => AppEvent::Submit,
            UiCommand::Reset => AppEvent::Msg(Msg::ResetRequested),
            UiCommand::Show => AppEvent::Show,
            UiCommand::Help => AppEvent::Help,
            UiCommand::Quit => AppEvent::Quit,
            UiCommand::Unknown(line) => AppEvent::Unknown(line),
        }
    }
}

pub fn run_app() -> anyhow::Result<()> {
    let settings = Args::parse().into_settings()?;
    logging::initialize(settings.log);
    lengthen_info!("Starting urlengthener against {}", settings.origin);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(&settings.origin, settings.transport.clone(), event_tx.clone())
        .context("starting request engine")?;

    let mut controller = Controller::new(
        AppState::new(settings.origin.clone()),
        effects,
        TerminalUi::stdio(),
    );
    controller.notice(HELP_TEXT);
    controller.show();

    spawn_input_reader(event_tx);
    run_event_loop(&mut controller, event_rx);

    lengthen_info!("Exiting");
    Ok(())
}

/// Reads terminal lines on a background thread. End of input counts as quit.
fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(parse_line(&line).into()).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::Quit);
    });
}

/// Applies events one at a time until quit is requested and no request is
/// in flight.
fn run_event_loop<U: UiSink>(controller: &mut Controller<U>, event_rx: mpsc::Receiver<AppEvent>) {
    let mut quitting = false;
    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => controller.dispatch(msg),
            AppEvent::Submit => controller.on_submit_triggered(),
            AppEvent::Show => controller.show(),
            AppEvent::Help => controller.notice(HELP_TEXT),
            AppEvent::Quit => quitting = true,
            AppEvent::Unknown(line) => {
                controller.notice(&format!("unknown command {line:?}, type help"));
            }
        }
        if quitting {
            if !controller.is_pending() {
                break;
            }
            lengthen_debug!("Quit requested, waiting for pending request");
        }
    }
}

/// Owns the session state for the lifetime of the UI and routes every
/// transition through the pure `update`.
pub struct Controller<U: UiSink> {
    state: AppState,
    effects: EffectRunner,
    ui: U,
}

impl<U: UiSink> Controller<U> {
    pub fn new(state: AppState, effects: EffectRunner, ui: U) -> Self {
        Self { state, effects, ui }
    }

    /// The submit button: starts a request when idle, resets when a result
    /// is shown, does nothing while a request is pending.
    pub fn on_submit_triggered(&mut self) {
        self.dispatch(Msg::SubmitClicked);
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.ui.render(&state.view());
        }
        self.state = state;
        self.effects.run(effects, &mut self.ui);
    }

    pub fn show(&mut self) {
        self.ui.render(&self.state.view());
    }

    pub fn notice(&mut self, text: &str) {
        self.ui.notice(text);
    }

    pub fn is_pending(&self) -> bool {
        self.state.session() == SessionState::Pending
    }
}
