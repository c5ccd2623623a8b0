use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub room_id: String,
    pub column_id: String,
    pub text: String,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Checklists serialized as a JSON array.
    pub task_lists: String,
    pub completed: bool,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::board_column::Entity",
        from = "Column::ColumnId",
        to = "super::board_column::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BoardColumn,
    #[sea_orm(has_many = "super::task_assignment::Entity")]
    TaskAssignment,
}

impl Related<super::board_column::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardColumn.def()
    }
}

impl Related<super::task_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskAssignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
