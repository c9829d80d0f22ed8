use crate::{
    cli::args::*,
    cli::{Args, CliError, Command},
    client::{Client, PartialResult},
    core::{
        config::ConfigLoader,
        error::ClientError,
        types::PositionKind,
    },
    models::{date, NewTask, Webhook},
    utils::serialization::{JsonSerializer, Serializer, YamlSerializer},
    VERSION,
};
use anyhow::anyhow;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Method;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

type CommandResult = std::result::Result<(), CliError>;

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        CliError::Failed(err.into())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Failed(err)
    }
}

fn usage(message: String) -> CliError {
    CliError::Usage(anyhow!(message))
}

/// Writes command results to stdout as YAML or JSON.
struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T) -> CommandResult {
        let bytes = if self.json {
            JsonSerializer.serialize(value)?
        } else {
            YamlSerializer.serialize(value)?
        };
        std::io::stdout()
            .write_all(&bytes)
            .map_err(|err| CliError::Failed(err.into()))
    }

    /// Print what was gathered, then fail if any list did.
    fn emit_partial<T: Serialize>(&self, partial: PartialResult<T>) -> CommandResult {
        self.emit(&partial.items)?;
        match partial.error {
            Some(error) => Err(ClientError::Composite(error).into()),
            None => Ok(()),
        }
    }
}

#[derive(Serialize)]
struct CurlOutput {
    status: u16,
    body: serde_json::Value,
}

pub async fn run(args: Args) -> CommandResult {
    let output = Output {
        json: args.use_json,
    };

    if let Command::Version = args.command {
        println!("wl {}", VERSION);
        return Ok(());
    }

    let config = ConfigLoader::load(args.access_token, args.client_id)
        .map_err(|err| CliError::Usage(err.into()))?;
    debug!(api_url = %config.api_url, "client configured");
    let client = Client::new(config)?;

    execute(&client, &output, args.command).await
}

async fn execute(client: &Client, output: &Output, command: Command) -> CommandResult {
    match command {
        Command::Version => Ok(()),
        Command::Authed => output.emit(&client.authed().await?),

        Command::User => output.emit(&client.user().await?),
        Command::UpdateUser(a) => {
            let mut user = client.user().await?;
            user.name = a.name;
            output.emit(&client.update_user(&user).await?)
        }
        Command::Users(a) => output.emit(&client.users(a.list_id).await?),
        Command::Root => output.emit(&client.root().await?),

        Command::Lists => output.emit(&client.lists().await?),
        Command::List(a) => output.emit(&client.list(a.id).await?),
        Command::CreateList(a) => output.emit(&client.create_list(&a.title).await?),
        Command::UpdateList(a) => {
            let mut list = client.list(a.id).await?;
            list.title = a.title;
            output.emit(&client.update_list(&list).await?)
        }
        Command::DeleteList(a) => {
            let list = client.list(a.id).await?;
            Ok(client.delete_list(&list).await?)
        }
        Command::ListTaskCount(a) => output.emit(&client.list_task_count(a.id).await?),

        Command::Folders => output.emit(&client.folders().await?),
        Command::Folder(a) => output.emit(&client.folder(a.id).await?),
        Command::CreateFolder(a) => {
            output.emit(&client.create_folder(&a.title, &a.list_ids).await?)
        }
        Command::UpdateFolder(a) => {
            let mut folder = client.folder(a.id).await?;
            if let Some(title) = a.title {
                folder.title = title;
            }
            if let Some(list_ids) = a.list_ids {
                folder.list_ids = list_ids;
            }
            output.emit(&client.update_folder(&folder).await?)
        }
        Command::DeleteFolder(a) => {
            let folder = client.folder(a.id).await?;
            Ok(client.delete_folder(&folder).await?)
        }
        Command::FolderRevisions => output.emit(&client.folder_revisions().await?),

        Command::Tasks(a) => match a.list_id {
            Some(list_id) => output.emit(&client.tasks_for_list(list_id, a.completed).await?),
            None => output.emit_partial(client.all_tasks(a.completed).await?),
        },
        Command::Task(a) => output.emit(&client.task(a.id).await?),
        Command::CreateTask(a) => {
            let mut task = NewTask::new(a.list_id, a.title)
                .recurring(a.recurrence_type, a.recurrence_count)
                .starred(a.starred)
                .completed(a.completed);
            if let Some(assignee_id) = a.assignee_id {
                task = task.assignee(assignee_id);
            }
            if let Some(due) = parse_due_date(a.due_date.as_deref())? {
                task = task.due(due);
            }
            output.emit(&client.create_task(&task).await?)
        }
        Command::UpdateTask(a) => {
            let mut task = client.task(a.id).await?;
            if let Some(title) = a.title {
                task.title = title;
            }
            if let Some(assignee_id) = a.assignee_id {
                task.assignee_id = Some(assignee_id);
            }
            if a.due_date.is_some() {
                task.due_date = parse_due_date(a.due_date.as_deref())?;
            }
            if let Some(recurrence_type) = a.recurrence_type {
                task.recurrence_type = recurrence_type;
            }
            if let Some(recurrence_count) = a.recurrence_count {
                task.recurrence_count = recurrence_count;
            }
            if let Some(starred) = a.starred {
                task.starred = starred;
            }
            if let Some(completed) = a.completed {
                task.completed = completed;
            }
            output.emit(&client.update_task(&task).await?)
        }
        Command::DeleteTask(a) => {
            let task = client.task(a.id).await?;
            Ok(client.delete_task(&task).await?)
        }

        Command::Subtasks(a) => match a.parent.parent() {
            Some(parent) => output.emit(&client.subtasks_for(parent, a.completed).await?),
            None => output.emit_partial(client.all_subtasks(a.completed).await?),
        },
        Command::Subtask(a) => output.emit(&client.subtask(a.id).await?),
        Command::CreateSubtask(a) => output.emit(
            &client
                .create_subtask(a.task_id, &a.title, a.completed)
                .await?,
        ),
        Command::UpdateSubtask(a) => {
            let mut subtask = client.subtask(a.id).await?;
            if let Some(title) = a.title {
                subtask.title = title;
            }
            if let Some(completed) = a.completed {
                subtask.completed = completed;
            }
            output.emit(&client.update_subtask(&subtask).await?)
        }
        Command::DeleteSubtask(a) => {
            let subtask = client.subtask(a.id).await?;
            Ok(client.delete_subtask(&subtask).await?)
        }

        Command::Notes(a) => match a.parent() {
            Some(parent) => output.emit(&client.notes_for(parent).await?),
            None => output.emit_partial(client.all_notes().await?),
        },
        Command::Note(a) => output.emit(&client.note(a.id).await?),
        Command::CreateNote(a) => output.emit(&client.create_note(a.task_id, &a.content).await?),
        Command::UpdateNote(a) => {
            let mut note = client.note(a.id).await?;
            note.content = a.content;
            output.emit(&client.update_note(&note).await?)
        }
        Command::DeleteNote(a) => {
            let note = client.note(a.id).await?;
            Ok(client.delete_note(&note).await?)
        }

        Command::Reminders(a) => match a.parent() {
            Some(parent) => output.emit(&client.reminders_for(parent).await?),
            None => output.emit_partial(client.all_reminders().await?),
        },
        Command::Reminder(a) => output.emit(&client.reminder(a.id).await?),
        Command::CreateReminder(a) => {
            let date = parse_instant(&a.date)?;
            output.emit(
                &client
                    .create_reminder(a.task_id, date, a.device_udid.as_deref())
                    .await?,
            )
        }
        Command::UpdateReminder(a) => {
            let mut reminder = client.reminder(a.id).await?;
            reminder.date = parse_instant(&a.date)?;
            output.emit(&client.update_reminder(&reminder).await?)
        }
        Command::DeleteReminder(a) => {
            let reminder = client.reminder(a.id).await?;
            Ok(client.delete_reminder(&reminder).await?)
        }

        Command::TaskComments(a) => match a.parent() {
            Some(parent) => output.emit(&client.task_comments_for(parent).await?),
            None => output.emit_partial(client.all_task_comments().await?),
        },
        Command::TaskComment(a) => output.emit(&client.task_comment(a.id).await?),
        Command::CreateTaskComment(a) => {
            output.emit(&client.create_task_comment(a.task_id, &a.text).await?)
        }
        Command::DeleteTaskComment(a) => {
            let comment = client.task_comment(a.id).await?;
            Ok(client.delete_task_comment(&comment).await?)
        }

        Command::Files(a) => match a.parent() {
            Some(parent) => output.emit(&client.files_for(parent).await?),
            None => output.emit_partial(client.all_files().await?),
        },
        Command::File(a) => output.emit(&client.file(a.id).await?),
        Command::CreateFile(a) => output.emit(&client.create_file(a.upload_id, a.task_id).await?),
        Command::DestroyFile(a) => {
            let file = client.file(a.id).await?;
            Ok(client.destroy_file(&file).await?)
        }
        Command::FilePreview(a) => output.emit(
            &client
                .file_preview(a.file_id, a.platform.as_deref(), a.size.as_deref())
                .await?,
        ),
        Command::UploadFile(a) => output.emit(
            &client
                .upload_file(
                    &a.local_file_path,
                    &a.remote_file_name,
                    &a.content_type,
                    a.md5sum.as_deref(),
                )
                .await?,
        ),

        Command::Memberships(a) => output.emit(&client.memberships(a.list_id).await?),
        Command::InviteMember(a) => {
            let membership = match (a.user_id, a.email) {
                (Some(user_id), _) => {
                    client
                        .invite_member_by_user_id(a.list_id, user_id, a.muted)
                        .await?
                }
                (None, Some(email)) => {
                    client
                        .invite_member_by_email(a.list_id, &email, a.muted)
                        .await?
                }
                (None, None) => {
                    return Err(usage(
                        "either --userID or --emailAddress is required".to_string(),
                    ))
                }
            };
            output.emit(&membership)
        }
        Command::AcceptMember(a) => {
            let membership = find_membership(client, a.id).await?;
            output.emit(&client.accept_membership(&membership, a.muted).await?)
        }
        Command::RejectInvite(a) => {
            let membership = find_membership(client, a.id).await?;
            Ok(client.reject_invite(&membership).await?)
        }
        Command::RemoveMember(a) => {
            let membership = find_membership(client, a.id).await?;
            Ok(client.remove_member(&membership).await?)
        }

        Command::ListPositions => output.emit(&client.list_positions().await?),
        Command::ListPosition(a) => output.emit(&client.position(PositionKind::List, a.id).await?),
        Command::UpdateListPosition(a) => reorder(client, output, PositionKind::List, a).await,
        Command::TaskPositions(a) => match a.list_id {
            Some(list_id) => output.emit(&client.task_positions_for_list(list_id).await?),
            None => output.emit_partial(client.all_task_positions().await?),
        },
        Command::TaskPosition(a) => output.emit(&client.position(PositionKind::Task, a.id).await?),
        Command::UpdateTaskPosition(a) => reorder(client, output, PositionKind::Task, a).await,
        Command::SubtaskPositions(a) => match a.parent() {
            Some(parent) => output.emit(&client.subtask_positions_for(parent).await?),
            None => output.emit_partial(client.all_subtask_positions().await?),
        },
        Command::SubtaskPosition(a) => {
            output.emit(&client.position(PositionKind::Subtask, a.id).await?)
        }
        Command::UpdateSubtaskPosition(a) => {
            reorder(client, output, PositionKind::Subtask, a).await
        }

        Command::Webhooks(a) => output.emit(&client.webhooks(a.list_id).await?),
        Command::CreateWebhook(a) => output.emit(
            &client
                .create_webhook(a.list_id, &a.url, &a.processor_type, &a.configuration)
                .await?,
        ),
        Command::DeleteWebhook(a) => {
            let webhook = Webhook {
                id: a.id,
                ..Webhook::default()
            };
            Ok(client.delete_webhook(&webhook).await?)
        }

        Command::Avatar(a) => output.emit(
            &client
                .avatar_url(a.user_id, a.size, !a.no_fallback)
                .await?,
        ),
        Command::Curl(a) => {
            let method = Method::from_bytes(a.method.to_ascii_uppercase().as_bytes())
                .map_err(|_| usage(format!("invalid HTTP method '{}'", a.method)))?;
            let body = a.body.map(String::into_bytes);
            let response = client.curl(method, &a.path, body).await?;
            let body = serde_json::from_slice(&response.body)
                .unwrap_or_else(|_| serde_json::Value::String(response.text().into_owned()));
            output.emit(&CurlOutput {
                status: response.status.as_u16(),
                body,
            })
        }
    }
}

/// `None` and the empty string both mean "no due date".
fn parse_due_date(raw: Option<&str>) -> std::result::Result<Option<NaiveDate>, CliError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => date::parse(text)
            .map(Some)
            .map_err(|err| usage(format!("invalid due date '{}': {}", text, err))),
    }
}

fn parse_instant(raw: &str) -> std::result::Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|date| date.with_timezone(&Utc))
        .map_err(|err| usage(format!("invalid date '{}': {}", raw, err)))
}

async fn find_membership(
    client: &Client,
    membership_id: u64,
) -> std::result::Result<crate::models::Membership, CliError> {
    client
        .memberships(None)
        .await?
        .into_iter()
        .find(|membership| membership.id == membership_id)
        .ok_or_else(|| CliError::Failed(anyhow!("membership {} not found", membership_id)))
}

async fn reorder(
    client: &Client,
    output: &Output,
    kind: PositionKind,
    args: UpdatePositionArgs,
) -> CommandResult {
    let mut position = client.position(kind, args.id).await?;
    position.values = args.values;
    output.emit(&client.update_position(kind, &position).await?)
}
