//! Typed values for every resource the service exposes.
//!
//! Field names match the wire (snake_case). Optional server fields are
//! `Option` and skipped when absent so that echoing a fetched value back in a
//! PATCH only sends what the server gave us.

pub mod date;
pub mod file;
pub mod folder;
pub mod list;
pub mod membership;
pub mod note;
pub mod position;
pub mod reminder;
pub mod subtask;
pub mod task;
pub mod task_comment;
pub mod upload;
pub mod user;
pub mod webhook;

pub use file::{File, FilePreview};
pub use folder::{Folder, FolderRevision};
pub use list::{List, ListTaskCount, ListType};
pub use membership::{Membership, MembershipState};
pub use note::Note;
pub use position::Position;
pub use reminder::Reminder;
pub use subtask::Subtask;
pub use task::{NewTask, Task};
pub use task_comment::TaskComment;
pub use upload::{Upload, UploadPart, UploadState};
pub use user::{Root, User};
pub use webhook::Webhook;

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
