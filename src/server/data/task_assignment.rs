//! Task assignment repository.
//!
//! Rows are only ever inserted or deleted, never updated. The reconciler drives
//! both operations relative to a desired assignee set.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::util::parse::parse_uuid_from_string;

pub struct TaskAssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskAssignmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the ids of users currently assigned to a task.
    pub async fn get_user_ids_by_task(&self, task_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::TaskAssignment::find()
            .filter(entity::task_assignment::Column::TaskId.eq(task_id.to_string()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| parse_uuid_from_string(a.user_id).map_err(DbErr::from))
            .collect()
    }

    /// Gets assignee ids for many tasks in one query, keyed by task id.
    ///
    /// Tasks without assignees are absent from the map.
    pub async fn get_user_ids_by_tasks(
        &self,
        task_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Uuid>>, DbErr> {
        if task_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids: Vec<String> = task_ids.iter().map(|id| id.to_string()).collect();
        let rows = entity::prelude::TaskAssignment::find()
            .filter(entity::task_assignment::Column::TaskId.is_in(ids))
            .all(self.db)
            .await?;

        let mut map: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for row in rows {
            map.entry(parse_uuid_from_string(row.task_id)?)
                .or_default()
                .push(parse_uuid_from_string(row.user_id)?);
        }

        Ok(map)
    }

    pub async fn is_assigned(&self, task_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let row = entity::prelude::TaskAssignment::find()
            .filter(entity::task_assignment::Column::TaskId.eq(task_id.to_string()))
            .filter(entity::task_assignment::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;

        Ok(row.is_some())
    }

    /// Deletes every assignment of the task whose user is not in `keep`.
    ///
    /// An empty `keep` deletes all assignments of the task.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows
    pub async fn delete_excluding(&self, task_id: Uuid, keep: &[Uuid]) -> Result<u64, DbErr> {
        let mut query = entity::prelude::TaskAssignment::delete_many()
            .filter(entity::task_assignment::Column::TaskId.eq(task_id.to_string()));

        if !keep.is_empty() {
            let keep: Vec<String> = keep.iter().map(|id| id.to_string()).collect();
            query = query.filter(entity::task_assignment::Column::UserId.is_not_in(keep));
        }

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Inserts one assignment row per user.
    ///
    /// Each insert is its own statement, so a failure leaves the earlier rows in place.
    pub async fn create_many(&self, task_id: Uuid, user_ids: &[Uuid]) -> Result<(), DbErr> {
        for user_id in user_ids {
            entity::task_assignment::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4().to_string()),
                task_id: ActiveValue::Set(task_id.to_string()),
                user_id: ActiveValue::Set(user_id.to_string()),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
