/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    SetUrl(String),
    SetDelay(String),
    SetDuration(String),
    /// Press the submit button, whatever its label currently is.
    Submit,
    Reset,
    Show,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  url <value>        set the URL to shorten
  delay <seconds>    seconds before the link becomes active (may be empty)
  duration <seconds> seconds the link stays active (alias: expires)
  <enter> | submit   press the submit button
  reset              clear a finished result
  show               print the current form
  help               print this text
  quit               exit once no request is pending";

/// Field values are everything after the first space, kept as typed.
pub fn parse_line(line: &str) -> UiCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return UiCommand::Submit;
    }

    let line = line.trim_start();
    let (keyword, value) = match line.split_once(' ') {
        Some((keyword, value)) => (keyword, Some(value)),
        None => (line.trim_end(), None),
    };

    match (keyword.to_ascii_lowercase().as_str(), value) {
        ("url", value) => UiCommand::SetUrl(value.unwrap_or_default().to_string()),
        ("delay", value) => UiCommand::SetDelay(value.unwrap_or_default().to_string()),
        ("duration" | "expires", value) => {
            UiCommand::SetDuration(value.unwrap_or_default().to_string())
        }
        ("submit", None) => UiCommand::Submit,
        ("reset", None) => UiCommand::Reset,
        ("show", None) => UiCommand::Show,
        ("help" | "?", None) => UiCommand::Help,
        ("quit" | "exit", None) => UiCommand::Quit,
        _ => UiCommand::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_submits() {
        assert_eq!(parse_line("\n"), UiCommand::Submit);
        assert_eq!(parse_line("   "), UiCommand::Submit);
    }

    #[test]
    fn field_values_are_verbatim() {
        assert_eq!(
            parse_line("url https://a.example/x?y=1 z\r\n"),
            UiCommand::SetUrl("https://a.example/x?y=1 z".to_string())
        );
        assert_eq!(parse_line("delay  5"), UiCommand::SetDelay(" 5".to_string()));
        assert_eq!(parse_line("expires 60"), UiCommand::SetDuration("60".to_string()));
    }

    #[test]
    fn field_without_value_clears_it() {
        assert_eq!(parse_line("delay"), UiCommand::SetDelay(String::new()));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_line("QUIT"), UiCommand::Quit);
        assert_eq!(parse_line("Submit"), UiCommand::Submit);
    }

    #[test]
    fn unknown_input_is_reported() {
        assert_eq!(
            parse_line("shorten now"),
            UiCommand::Unknown("shorten now".to_string())
        );
        assert_eq!(parse_line("show me"), UiCommand::Unknown("show me".to_string()));
    }
}
