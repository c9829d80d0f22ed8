pub mod args;
pub mod commands;

pub use args::*;
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser, Debug)]
#[command(name = "wl")]
#[command(version = crate::VERSION)]
#[command(about = "Command line client for the Wunderlist API")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Credentials default to WL_ACCESS_TOKEN and WL_CLIENT_ID. Output is YAML unless --useJSON is given."
)]
pub struct Args {
    /// Access token (falls back to WL_ACCESS_TOKEN)
    #[arg(long = "accessToken", global = true, value_name = "TOKEN")]
    pub access_token: Option<String>,

    /// Client id (falls back to WL_CLIENT_ID)
    #[arg(long = "clientID", global = true, value_name = "ID")]
    pub client_id: Option<String>,

    /// Log request and response transcripts
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Render output as JSON instead of YAML
    #[arg(short = 'j', long = "useJSON", global = true)]
    pub use_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
pub enum Command {
    /// Print the client version
    Version,
    /// Check whether the credentials are accepted
    Authed,

    /// Show the current user
    User,
    /// Rename the current user
    UpdateUser(UpdateUserArgs),
    /// Users sharing lists with the current user
    Users(ListFilterArgs),
    /// Show the root object
    Root,

    /// All lists
    Lists,
    List(IdArgs),
    CreateList(TitleArgs),
    UpdateList(UpdateListArgs),
    DeleteList(IdArgs),
    /// Completed and uncompleted task counts of a list
    ListTaskCount(IdArgs),

    Folders,
    Folder(IdArgs),
    CreateFolder(CreateFolderArgs),
    UpdateFolder(UpdateFolderArgs),
    DeleteFolder(IdArgs),
    FolderRevisions,

    /// Tasks of one list, or of every list
    Tasks(TasksArgs),
    Task(IdArgs),
    CreateTask(CreateTaskArgs),
    /// Update a task; cleared fields are sent as removals
    UpdateTask(UpdateTaskArgs),
    DeleteTask(IdArgs),

    Subtasks(SubtasksArgs),
    Subtask(IdArgs),
    CreateSubtask(CreateSubtaskArgs),
    UpdateSubtask(UpdateSubtaskArgs),
    DeleteSubtask(IdArgs),

    Notes(ParentArgs),
    Note(IdArgs),
    CreateNote(CreateNoteArgs),
    UpdateNote(UpdateNoteArgs),
    DeleteNote(IdArgs),

    Reminders(ParentArgs),
    Reminder(IdArgs),
    CreateReminder(CreateReminderArgs),
    UpdateReminder(UpdateReminderArgs),
    DeleteReminder(IdArgs),

    TaskComments(ParentArgs),
    TaskComment(IdArgs),
    CreateTaskComment(CreateTaskCommentArgs),
    DeleteTaskComment(IdArgs),

    Files(ParentArgs),
    File(IdArgs),
    /// Bind a finished upload to a task
    CreateFile(CreateFileArgs),
    DestroyFile(IdArgs),
    FilePreview(FilePreviewArgs),
    /// Upload a local file in one part
    UploadFile(UploadFileArgs),

    Memberships(ListFilterArgs),
    InviteMember(InviteMemberArgs),
    AcceptMember(AcceptMemberArgs),
    RejectInvite(IdArgs),
    RemoveMember(IdArgs),

    ListPositions,
    ListPosition(IdArgs),
    UpdateListPosition(UpdatePositionArgs),
    /// Task positions of one list, or of every list
    TaskPositions(ListFilterArgs),
    TaskPosition(IdArgs),
    UpdateTaskPosition(UpdatePositionArgs),
    SubtaskPositions(ParentArgs),
    SubtaskPosition(IdArgs),
    UpdateSubtaskPosition(UpdatePositionArgs),

    Webhooks(ListFilterArgs),
    CreateWebhook(CreateWebhookArgs),
    DeleteWebhook(IdArgs),

    /// Resolve a user's avatar URL
    Avatar(AvatarArgs),
    /// Send a raw authenticated request
    Curl(CurlArgs),
}

/// Failure classes mapped to process exit codes by the binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Misuse: missing credentials or malformed arguments (exit 2).
    #[error("{0:#}")]
    Usage(anyhow::Error),
    /// The request failed (exit 1).
    #[error("{0:#}")]
    Failed(anyhow::Error),
}

pub async fn run(args: Args) -> std::result::Result<(), CliError> {
    commands::run(args).await
}
