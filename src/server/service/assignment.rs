//! Task assignment reconciler.
//!
//! Turns a desired assignee set into the minimal deletes and inserts against the
//! stored assignments of a task. Users assigned before and still desired are not
//! touched. The delete and insert steps are separate writes; re-running with the
//! same desired set from any partial state ends at the same assignments.

use sea_orm::DatabaseConnection;
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::server::{
    data::{
        room_member::RoomMemberRepository, task::TaskRepository,
        task_assignment::TaskAssignmentRepository,
    },
    error::{assignment::AssignmentError, AppError},
    model::task::AssignmentOutcome,
};

pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the room of a task so the caller can be checked before reconciling.
    ///
    /// # Returns
    /// - `Ok(Uuid)` - Room id
    /// - `Err(AssignmentError::TaskNotFound)` - No such task
    pub async fn task_room(&self, task_id: Uuid) -> Result<Uuid, AppError> {
        TaskRepository::new(self.db)
            .find_by_id(task_id)
            .await?
            .map(|task| task.room_id)
            .ok_or_else(|| AssignmentError::TaskNotFound.into())
    }

    /// Makes the task's assignees equal to `desired`.
    ///
    /// An absent list is an error while an empty list unassigns everyone. Duplicate
    /// ids are collapsed.
    ///
    /// # Arguments
    /// - `task_id` - Task to reconcile
    /// - `desired` - Target assignee set as sent by the client
    ///
    /// # Returns
    /// - `Ok(AssignmentOutcome)` - Added, removed and final assignees, each sorted
    /// - `Err(AssignmentError::MissingAssigneeList)` - `desired` was absent
    /// - `Err(AssignmentError::TaskNotFound)` - No such task
    /// - `Err(AssignmentError::AssigneeNotInRoom)` - A desired user is not a room member
    /// - `Err(AssignmentError::ReconciliationIncomplete)` - A write failed; safe to retry
    pub async fn reconcile(
        &self,
        task_id: Uuid,
        desired: Option<Vec<Uuid>>,
    ) -> Result<AssignmentOutcome, AppError> {
        let Some(desired) = desired else {
            return Err(AssignmentError::MissingAssigneeList.into());
        };
        let desired: BTreeSet<Uuid> = desired.into_iter().collect();

        let room_id = self.task_room(task_id).await?;

        let desired_ids: Vec<Uuid> = desired.iter().copied().collect();
        let members = RoomMemberRepository::new(self.db)
            .filter_members(room_id, &desired_ids)
            .await?;
        if let Some(outsider) = desired_ids.iter().find(|id| !members.contains(*id)) {
            return Err(AssignmentError::AssigneeNotInRoom(*outsider).into());
        }

        let assignment_repo = TaskAssignmentRepository::new(self.db);

        let current: BTreeSet<Uuid> = assignment_repo
            .get_user_ids_by_task(task_id)
            .await?
            .into_iter()
            .collect();

        let removed: Vec<Uuid> = current.difference(&desired).copied().collect();
        let added: Vec<Uuid> = desired.difference(&current).copied().collect();

        if !removed.is_empty() {
            assignment_repo
                .delete_excluding(task_id, &desired_ids)
                .await
                .map_err(AssignmentError::ReconciliationIncomplete)?;
        }

        if !added.is_empty() {
            assignment_repo
                .create_many(task_id, &added)
                .await
                .map_err(AssignmentError::ReconciliationIncomplete)?;
        }

        tracing::info!(
            "Task {} assignees reconciled: {} added, {} removed",
            task_id,
            added.len(),
            removed.len()
        );

        Ok(AssignmentOutcome {
            task_id,
            added,
            removed,
            assigned: desired_ids,
        })
    }
}
