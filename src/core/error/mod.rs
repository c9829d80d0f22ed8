use crate::core::types::ErrorKind;
use std::fmt;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid request url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {observed} (expected {})", join_codes(.expected))]
    UnexpectedStatus { observed: u16, expected: Vec<u16> },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Composite(#[from] CompositeError),
}

impl ClientError {
    pub fn invalid_argument<T: Into<String>>(message: T) -> Self {
        ClientError::InvalidArgument(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ClientError::InvalidUrl { .. } | ClientError::Transport(_) => ErrorKind::Transport,
            ClientError::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            ClientError::Decode(_) | ClientError::Encode(_) => ErrorKind::Decode,
            ClientError::Io(_) => ErrorKind::Io,
            ClientError::Composite(_) => ErrorKind::Composite,
        }
    }

    /// Observed HTTP status, when the error is a status mismatch.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::UnexpectedStatus { observed, .. } => Some(*observed),
            _ => None,
        }
    }
}

fn join_codes(codes: &[u16]) -> String {
    codes
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Failure of one subject (for example one list) inside a fan-out.
#[derive(Debug)]
pub struct SubjectError {
    pub subject_kind: &'static str,
    pub subject_id: u64,
    pub error: ClientError,
}

impl fmt::Display for SubjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.subject_kind, self.subject_id, self.error)
    }
}

/// Per-subject failures collected by a fan-out aggregation.
#[derive(Debug, Default)]
pub struct CompositeError {
    pub failures: Vec<SubjectError>,
}

impl CompositeError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subject_kind: &'static str, subject_id: u64, error: ClientError) {
        self.failures.push(SubjectError {
            subject_kind,
            subject_id,
            error,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Ids of the subjects that failed, in the order their errors arrived.
    pub fn subject_ids(&self) -> Vec<u64> {
        self.failures.iter().map(|f| f.subject_id).collect()
    }
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} request(s) failed", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "; {}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for CompositeError {}
