use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Empty path")]
    Empty,

    #[error("Empty segment at byte {0}")]
    EmptySegment(usize),

    #[error("Unterminated index at byte {0}")]
    UnterminatedIndex(usize),

    #[error("Invalid index `{0}`")]
    InvalidIndex(String),

    #[error("Unexpected character `{ch}` at byte {at}")]
    UnexpectedChar { ch: char, at: usize },
}

/// Errors produced while editing a [`SiteConfig`](crate::site::SiteConfig)
/// through a path.
#[derive(Error, Debug)]
pub enum EditError {
    #[error("Invalid path: {0}")]
    Path(#[from] PathError),

    #[error("No field `{field}` under `{at}`")]
    UnknownField { at: String, field: String },

    #[error("`{0}` is not a list")]
    NotAList(String),

    #[error("`{0}` has no child fields")]
    NotARecord(String),

    #[error("Index {index} out of bounds for `{at}` (len {len})")]
    IndexOutOfBounds { at: String, index: usize, len: usize },

    #[error("Value does not fit `{at}`: {source}")]
    InvalidValue {
        at: String,
        #[source]
        source: serde_json::Error,
    },
}

impl EditError {
    /// Rewrite the location carried by this error.
    ///
    /// Nodes report failures without knowing where they sit in the
    /// document; the walker calls this with the path it has walked so far.
    pub(crate) fn at(self, path: &str) -> Self {
        let at = path.to_string();
        match self {
            EditError::UnknownField { field, .. } => EditError::UnknownField { at, field },
            EditError::NotAList(_) => EditError::NotAList(at),
            EditError::NotARecord(_) => EditError::NotARecord(at),
            EditError::IndexOutOfBounds { index, len, .. } => {
                EditError::IndexOutOfBounds { at, index, len }
            }
            EditError::InvalidValue { source, .. } => EditError::InvalidValue { at, source },
            other => other,
        }
    }
}

/// Reasons a contact-form submission is refused before it reaches the inbox.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Field `{0}` is required")]
    Missing(&'static str),

    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
}
