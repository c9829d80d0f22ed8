use serde::{Deserialize, Serialize};

/// Error kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidArgument,
    Transport,
    UnexpectedStatus,
    Decode,
    Composite,
    Io,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Parent resource used to scope a collection query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    List(u64),
    Task(u64),
}

impl Parent {
    /// Query key and id, e.g. `("list_id", 12)`.
    pub fn query(self) -> (&'static str, u64) {
        match self {
            Parent::List(id) => ("list_id", id),
            Parent::Task(id) => ("task_id", id),
        }
    }

    pub fn id(self) -> u64 {
        self.query().1
    }
}

/// Ordering anchor families served by the positions endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionKind {
    #[serde(rename = "list_position")]
    List,
    #[serde(rename = "task_position")]
    Task,
    #[serde(rename = "subtask_position")]
    Subtask,
}

impl PositionKind {
    /// Collection path relative to the API base.
    pub fn path(self) -> &'static str {
        match self {
            PositionKind::List => "list_positions",
            PositionKind::Task => "task_positions",
            PositionKind::Subtask => "subtask_positions",
        }
    }
}
