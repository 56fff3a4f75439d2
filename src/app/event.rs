/// Something for the display layer to show. Produced by the dispatcher,
/// never fed back into the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// A chat line, either received or our own echo.
    Chat {
        target: String,
        sender: Option<String>,
        text: String,
    },

    /// Any other server message, shown generically.
    Notice {
        origin: Option<String>,
        command: String,
        params: Vec<String>,
        trailing: Option<String>,
    },

    /// Local misuse; nothing was sent.
    Error { text: String },
}
