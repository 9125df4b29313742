#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The request never produced a response (network down, CORS, aborted).
    Transport(String),
    /// An option endpoint answered with a non-success status.
    Status { status: u16, body: String },
    /// An option endpoint answered with something that is not an option list.
    Decode(String),
    InvalidAreaId(String),
    MissingElement(String),
    Config(String),
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickerError::Transport(msg) => write!(f, "request failed: {msg}"),
            PickerError::Status { status, body } => {
                let body = body.trim();
                if body.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {body}")
                }
            }
            PickerError::Decode(msg) => write!(f, "malformed option list: {msg}"),
            PickerError::InvalidAreaId(id) => write!(f, "invalid node area id: {id:?}"),
            PickerError::MissingElement(id) => write!(f, "missing element #{id}"),
            PickerError::Config(msg) => write!(f, "invalid picker config: {msg}"),
        }
    }
}

impl std::error::Error for PickerError {}
