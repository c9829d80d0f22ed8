use crate::core::types::Parent;
use clap::{ArgGroup, Args};
use std::path::PathBuf;

/// Single entity addressed by id.
#[derive(Args, Debug)]
pub struct IdArgs {
    #[arg(long)]
    pub id: u64,
}

/// Optional list scope for collections that can be listed globally.
#[derive(Args, Debug)]
pub struct ListFilterArgs {
    #[arg(long = "listID")]
    pub list_id: Option<u64>,
}

/// `--listID` or `--taskID`; with neither, the query fans out across lists.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("parent").args(["list_id", "task_id"])))]
pub struct ParentArgs {
    #[arg(long = "listID")]
    pub list_id: Option<u64>,
    #[arg(long = "taskID")]
    pub task_id: Option<u64>,
}

impl ParentArgs {
    pub fn parent(&self) -> Option<Parent> {
        match (self.list_id, self.task_id) {
            (Some(list_id), _) => Some(Parent::List(list_id)),
            (None, Some(task_id)) => Some(Parent::Task(task_id)),
            (None, None) => None,
        }
    }
}

#[derive(Args, Debug)]
pub struct UpdateUserArgs {
    #[arg(long)]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct TitleArgs {
    #[arg(long)]
    pub title: String,
}

#[derive(Args, Debug)]
pub struct UpdateListArgs {
    #[arg(long)]
    pub id: u64,
    #[arg(long)]
    pub title: String,
}

#[derive(Args, Debug)]
pub struct CreateFolderArgs {
    #[arg(long)]
    pub title: String,
    /// Comma separated list ids
    #[arg(long = "listIDs", value_delimiter = ',')]
    pub list_ids: Vec<u64>,
}

#[derive(Args, Debug)]
pub struct UpdateFolderArgs {
    #[arg(long)]
    pub id: u64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long = "listIDs", value_delimiter = ',')]
    pub list_ids: Option<Vec<u64>>,
}

#[derive(Args, Debug)]
pub struct TasksArgs {
    /// Omit to gather tasks from every list
    #[arg(long = "listID")]
    pub list_id: Option<u64>,
    #[arg(long)]
    pub completed: Option<bool>,
}

#[derive(Args, Debug)]
pub struct CreateTaskArgs {
    #[arg(long = "listID")]
    pub list_id: u64,
    #[arg(long)]
    pub title: String,
    #[arg(long = "assigneeID")]
    pub assignee_id: Option<u64>,
    /// YYYY-MM-DD
    #[arg(long = "dueDate")]
    pub due_date: Option<String>,
    #[arg(long = "recurrenceType", default_value = "")]
    pub recurrence_type: String,
    #[arg(long = "recurrenceCount", default_value_t = 0)]
    pub recurrence_count: u32,
    #[arg(long)]
    pub starred: bool,
    #[arg(long)]
    pub completed: bool,
}

/// Flags left unset keep the task's current value.
#[derive(Args, Debug)]
pub struct UpdateTaskArgs {
    #[arg(long)]
    pub id: u64,
    #[arg(long)]
    pub title: Option<String>,
    /// 0 unassigns
    #[arg(long = "assigneeID")]
    pub assignee_id: Option<u64>,
    /// YYYY-MM-DD, or an empty string to clear
    #[arg(long = "dueDate")]
    pub due_date: Option<String>,
    /// Empty string with count 0 clears the recurrence
    #[arg(long = "recurrenceType")]
    pub recurrence_type: Option<String>,
    #[arg(long = "recurrenceCount")]
    pub recurrence_count: Option<u32>,
    #[arg(long)]
    pub starred: Option<bool>,
    #[arg(long)]
    pub completed: Option<bool>,
}

#[derive(Args, Debug)]
pub struct SubtasksArgs {
    #[command(flatten)]
    pub parent: ParentArgs,
    #[arg(long)]
    pub completed: Option<bool>,
}

#[derive(Args, Debug)]
pub struct CreateSubtaskArgs {
    #[arg(long = "taskID")]
    pub task_id: u64,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub completed: bool,
}

#[derive(Args, Debug)]
pub struct UpdateSubtaskArgs {
    #[arg(long)]
    pub id: u64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub completed: Option<bool>,
}

#[derive(Args, Debug)]
pub struct CreateNoteArgs {
    #[arg(long = "taskID")]
    pub task_id: u64,
    #[arg(long)]
    pub content: String,
}

#[derive(Args, Debug)]
pub struct UpdateNoteArgs {
    #[arg(long)]
    pub id: u64,
    #[arg(long)]
    pub content: String,
}

#[derive(Args, Debug)]
pub struct CreateReminderArgs {
    #[arg(long = "taskID")]
    pub task_id: u64,
    /// RFC 3339 instant
    #[arg(long)]
    pub date: String,
    #[arg(long = "deviceUDID")]
    pub device_udid: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateReminderArgs {
    #[arg(long)]
    pub id: u64,
    #[arg(long)]
    pub date: String,
}

#[derive(Args, Debug)]
pub struct CreateTaskCommentArgs {
    #[arg(long = "taskID")]
    pub task_id: u64,
    #[arg(long)]
    pub text: String,
}

#[derive(Args, Debug)]
pub struct FilePreviewArgs {
    #[arg(long = "fileID")]
    pub file_id: u64,
    #[arg(long)]
    pub platform: Option<String>,
    #[arg(long)]
    pub size: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateFileArgs {
    #[arg(long = "uploadID")]
    pub upload_id: u64,
    #[arg(long = "taskID")]
    pub task_id: u64,
}

#[derive(Args, Debug)]
pub struct UploadFileArgs {
    #[arg(long = "localFilePath", value_name = "PATH")]
    pub local_file_path: PathBuf,
    #[arg(long = "remoteFileName")]
    pub remote_file_name: String,
    #[arg(long = "contentType", default_value = "application/octet-stream")]
    pub content_type: String,
    #[arg(long)]
    pub md5sum: Option<String>,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("invitee").required(true).args(["user_id", "email"])))]
pub struct InviteMemberArgs {
    #[arg(long = "listID")]
    pub list_id: u64,
    #[arg(long = "userID")]
    pub user_id: Option<u64>,
    #[arg(long = "emailAddress")]
    pub email: Option<String>,
    #[arg(long)]
    pub muted: bool,
}

#[derive(Args, Debug)]
pub struct AcceptMemberArgs {
    #[arg(long)]
    pub id: u64,
    #[arg(long)]
    pub muted: bool,
}

#[derive(Args, Debug)]
pub struct UpdatePositionArgs {
    #[arg(long)]
    pub id: u64,
    /// Comma separated member ids in display order
    #[arg(long, value_delimiter = ',')]
    pub values: Vec<u64>,
}

#[derive(Args, Debug)]
pub struct CreateWebhookArgs {
    #[arg(long = "listID")]
    pub list_id: u64,
    #[arg(long)]
    pub url: String,
    #[arg(long = "processorType", default_value = "generic")]
    pub processor_type: String,
    #[arg(long, default_value = "")]
    pub configuration: String,
}

#[derive(Args, Debug)]
pub struct AvatarArgs {
    #[arg(long = "userID")]
    pub user_id: u64,
    /// 0 lets the server choose
    #[arg(long, default_value_t = 0)]
    pub size: u32,
    /// Answer an empty URL instead of a placeholder when the user has no avatar
    #[arg(long = "noFallback")]
    pub no_fallback: bool,
}

#[derive(Args, Debug)]
pub struct CurlArgs {
    #[arg(long, default_value = "GET")]
    pub method: String,
    /// Path relative to the API root
    #[arg(long)]
    pub path: String,
    /// JSON request body
    #[arg(long)]
    pub body: Option<String>,
}
