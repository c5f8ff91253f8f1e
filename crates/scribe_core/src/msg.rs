use crate::{EndpointConfig, NotificationToken, PublishResult};

/// One of the article form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Topic,
    Description,
    Audience,
    Format,
    Keywords,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited one of the article form fields.
    FieldEdited(FormField, String),
    /// User edited the generation webhook URL.
    GenerateUrlEdited(String),
    /// User edited the publish webhook URL.
    PublishUrlEdited(String),
    /// Restore webhook URLs from persisted state at startup.
    EndpointsRestored(EndpointConfig),
    /// User edited the article body in the editor.
    ContentEdited(String),
    /// User clicked Generate.
    GenerateClicked,
    /// The generation call settled; `Err` carries the user-facing message.
    GenerateFinished(Result<String, String>),
    /// User clicked Publish.
    PublishClicked,
    /// The publish call settled; `Err` carries the user-facing message.
    PublishFinished(Result<PublishResult, String>),
    /// User clicked Copy.
    CopyClicked,
    /// The clipboard write settled; `Err` carries the user-facing message.
    CopyFinished(Result<(), String>),
    /// User closed the notification by hand.
    NotificationDismissed,
    /// A notification's auto-dismiss window elapsed.
    NotificationTimedOut { token: NotificationToken },
    /// Fallback for placeholder wiring.
    NoOp,
}
