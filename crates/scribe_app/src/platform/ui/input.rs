use scribe_core::{FormField, Msg};

/// One event for the shell loop: either a state-machine message or a
/// shell-level command that never touches application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellEvent {
    Dispatch(Msg),
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// Parses one input line. `None` means a blank line.
pub(crate) fn parse_line(line: &str) -> Option<ShellEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match command {
        "topic" => ShellEvent::Dispatch(Msg::FieldEdited(FormField::Topic, rest.to_string())),
        "description" | "desc" => {
            ShellEvent::Dispatch(Msg::FieldEdited(FormField::Description, rest.to_string()))
        }
        "audience" => {
            ShellEvent::Dispatch(Msg::FieldEdited(FormField::Audience, rest.to_string()))
        }
        "format" => ShellEvent::Dispatch(Msg::FieldEdited(FormField::Format, rest.to_string())),
        "keywords" => {
            ShellEvent::Dispatch(Msg::FieldEdited(FormField::Keywords, rest.to_string()))
        }
        "generate-url" => ShellEvent::Dispatch(Msg::GenerateUrlEdited(rest.to_string())),
        "publish-url" => ShellEvent::Dispatch(Msg::PublishUrlEdited(rest.to_string())),
        "edit" => ShellEvent::Dispatch(Msg::ContentEdited(rest.to_string())),
        "generate" => ShellEvent::Dispatch(Msg::GenerateClicked),
        "publish" => ShellEvent::Dispatch(Msg::PublishClicked),
        "copy" => ShellEvent::Dispatch(Msg::CopyClicked),
        "dismiss" => ShellEvent::Dispatch(Msg::NotificationDismissed),
        "show" => ShellEvent::Show,
        "help" => ShellEvent::Help,
        "quit" | "exit" => ShellEvent::Quit,
        _ => ShellEvent::Unknown(line.to_string()),
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t"), None);
    }

    #[test]
    fn field_commands_keep_the_rest_of_the_line() {
        assert_eq!(
            parse_line("topic Password resets explained"),
            Some(ShellEvent::Dispatch(Msg::FieldEdited(
                FormField::Topic,
                "Password resets explained".to_string()
            )))
        );
        assert_eq!(
            parse_line("desc   step by step  "),
            Some(ShellEvent::Dispatch(Msg::FieldEdited(
                FormField::Description,
                "step by step".to_string()
            )))
        );
    }

    #[test]
    fn bare_commands_take_no_argument() {
        assert_eq!(
            parse_line("generate"),
            Some(ShellEvent::Dispatch(Msg::GenerateClicked))
        );
        assert_eq!(
            parse_line("publish"),
            Some(ShellEvent::Dispatch(Msg::PublishClicked))
        );
        assert_eq!(parse_line("quit"), Some(ShellEvent::Quit));
    }

    #[test]
    fn url_commands_replace_the_endpoint() {
        assert_eq!(
            parse_line("generate-url https://hooks.test/g"),
            Some(ShellEvent::Dispatch(Msg::GenerateUrlEdited(
                "https://hooks.test/g".to_string()
            )))
        );
    }

    #[test]
    fn unknown_commands_are_reported_not_dispatched() {
        assert_eq!(
            parse_line("frobnicate now"),
            Some(ShellEvent::Unknown("frobnicate now".to_string()))
        );
    }
}
