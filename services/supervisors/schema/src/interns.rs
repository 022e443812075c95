use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Intern record, optionally assigned to a supervisor.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "interns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    /// `NULL` while the intern is unassigned.
    pub supervisor_id: Option<Uuid>,
    pub school: String,
    pub department: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::supervisors::Entity",
        from = "Column::SupervisorId",
        to = "super::supervisors::Column::Id",
        on_delete = "SetNull"
    )]
    Supervisor,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::supervisors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supervisor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
