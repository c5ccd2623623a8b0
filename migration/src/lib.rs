pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_room_table;
mod m20260105_000003_create_room_member_table;
mod m20260105_000004_create_room_invitation_table;
mod m20260105_000005_create_friendship_table;
mod m20260105_000006_create_board_column_table;
mod m20260105_000007_create_task_table;
mod m20260105_000008_create_task_assignment_table;
mod m20260105_000009_create_entry_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_room_table::Migration),
            Box::new(m20260105_000003_create_room_member_table::Migration),
            Box::new(m20260105_000004_create_room_invitation_table::Migration),
            Box::new(m20260105_000005_create_friendship_table::Migration),
            Box::new(m20260105_000006_create_board_column_table::Migration),
            Box::new(m20260105_000007_create_task_table::Migration),
            Box::new(m20260105_000008_create_task_assignment_table::Migration),
            Box::new(m20260105_000009_create_entry_table::Migration),
        ]
    }
}
