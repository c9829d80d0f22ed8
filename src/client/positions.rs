//! Ordering anchors for lists, tasks and subtasks.
//!
//! The three families share one shape and differ only in path, so a single set
//! of methods takes a [`PositionKind`].

use crate::client::{endpoint, require_id, Client};
use crate::core::error::{ClientError, Result};
use crate::core::types::{Parent, PositionKind};
use crate::models::Position;
use serde::Serialize;

#[derive(Serialize)]
struct PositionUpdate<'a> {
    values: &'a [u64],
    revision: u64,
}

impl Client {
    /// Positions of `kind`, scoped by `parent` where the family supports it.
    ///
    /// List positions take no parent; task positions only take a list.
    pub async fn positions(
        &self,
        kind: PositionKind,
        parent: Option<Parent>,
    ) -> Result<Vec<Position>> {
        match (kind, parent) {
            (PositionKind::List, Some(_)) => Err(ClientError::invalid_argument(
                "list positions are not scoped by a parent",
            )),
            (PositionKind::Task, Some(Parent::Task(_))) | (PositionKind::Task, None) => Err(
                ClientError::invalid_argument("task positions are scoped by list_id"),
            ),
            (PositionKind::Subtask, None) => Err(ClientError::invalid_argument(
                "subtask positions are scoped by list_id or task_id",
            )),
            (_, None) => self.get(kind.path()).await,
            (_, Some(parent)) => {
                let (key, id) = parent.query();
                require_id(key, id)?;
                self.get(&endpoint(kind.path(), &[(key, id.to_string())]))
                    .await
            }
        }
    }

    pub async fn position(&self, kind: PositionKind, position_id: u64) -> Result<Position> {
        require_id("position_id", position_id)?;
        self.get(&format!("{}/{}", kind.path(), position_id)).await
    }

    /// Replace the ordering; `revision` must match the server's.
    pub async fn update_position(
        &self,
        kind: PositionKind,
        position: &Position,
    ) -> Result<Position> {
        require_id("position.id", position.id)?;
        let body = PositionUpdate {
            values: &position.values,
            revision: position.revision,
        };
        self.patch(&format!("{}/{}", kind.path(), position.id), &body)
            .await
    }

    pub async fn list_positions(&self) -> Result<Vec<Position>> {
        self.positions(PositionKind::List, None).await
    }

    pub async fn task_positions_for_list(&self, list_id: u64) -> Result<Vec<Position>> {
        self.positions(PositionKind::Task, Some(Parent::List(list_id)))
            .await
    }

    pub async fn subtask_positions_for(&self, parent: Parent) -> Result<Vec<Position>> {
        self.positions(PositionKind::Subtask, Some(parent)).await
    }
}
