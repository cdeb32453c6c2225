use std::io::{self, Stderr, Stdout, Write};

use lengthen_logging::lengthen_warn;
use urlengthener_core::AppViewModel;

use super::render::render;

/// Where the controller shows its state.
pub trait UiSink {
    /// Redraw the form: output field, busy mode, submit label.
    fn render(&mut self, view: &AppViewModel);
    /// Blocking, user-visible error notification.
    fn alert(&mut self, message: &str);
    /// Free-form informational text.
    fn notice(&mut self, text: &str);
}

pub struct TerminalUi<O: Write, E: Write> {
    out: O,
    err: E,
}

impl TerminalUi<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> TerminalUi<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> UiSink for TerminalUi<O, E> {
    fn render(&mut self, view: &AppViewModel) {
        let result = render(view)
            .iter()
            .try_for_each(|line| writeln!(self.out, "{line}"))
            .and_then(|()| self.out.flush());
        if let Err(err) = result {
            lengthen_warn!("Failed to render form: {}", err);
        }
    }

    fn alert(&mut self, message: &str) {
        let result = writeln!(self.err, "error: {message}").and_then(|()| self.err.flush());
        if let Err(err) = result {
            lengthen_warn!("Failed to show alert {:?}: {}", message, err);
        }
    }

    fn notice(&mut self, text: &str) {
        let result = writeln!(self.out, "{text}").and_then(|()| self.out.flush());
        if let Err(err) = result {
            lengthen_warn!("Failed to write notice: {}", err);
        }
    }
}
