use urlengthener_core::{AppViewModel, SessionState};

pub const BUSY_TEXT: &str = "Shortening...";

/// Lines describing the form, in display order.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let session_label = match view.session {
        SessionState::Idle => "Idle",
        SessionState::Pending => "Pending",
        SessionState::Completed => "Completed",
    };

    let mut lines = Vec::with_capacity(5);
    lines.push(format!("Session: {session_label}"));
    lines.push(format!(
        "  url: {}  delay: {}  duration: {}",
        display_field(&view.url),
        display_field(&view.delay),
        display_field(&view.duration)
    ));
    if view.busy {
        lines.push(format!("  {BUSY_TEXT}"));
    }
    if !view.output.is_empty() {
        lines.push(format!("  result: {}", view.output));
    }
    if !view.busy {
        lines.push(format!("  [Enter] {}", view.submit_label));
    }
    lines
}

fn display_field(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urlengthener_core::{DO_ANOTHER_LABEL, SHORTEN_LABEL};

    #[test]
    fn idle_form_offers_shorten() {
        let view = AppViewModel {
            session: SessionState::Idle,
            submit_label: SHORTEN_LABEL,
            url: "https://a.example".to_string(),
            ..AppViewModel::default()
        };

        assert_eq!(
            render(&view),
            vec![
                "Session: Idle".to_string(),
                "  url: https://a.example  delay: -  duration: -".to_string(),
                "  [Enter] Shorten".to_string(),
            ]
        );
    }

    #[test]
    fn pending_form_shows_busy_and_hides_button() {
        let view = AppViewModel {
            session: SessionState::Pending,
            busy: true,
            submit_label: SHORTEN_LABEL,
            ..AppViewModel::default()
        };

        let lines = render(&view);
        assert!(lines.contains(&format!("  {BUSY_TEXT}")));
        assert!(!lines.iter().any(|line| line.contains("[Enter]")));
    }

    #[test]
    fn completed_form_shows_result() {
        let view = AppViewModel {
            session: SessionState::Completed,
            output: "https://short.example/lengthened/abc123".to_string(),
            submit_label: DO_ANOTHER_LABEL,
            ..AppViewModel::default()
        };

        let lines = render(&view);
        assert!(lines.contains(&"  result: https://short.example/lengthened/abc123".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("  [Enter] Do Another"));
    }
}
