use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Identity record shared by every role. `role` and `account_status` hold the
/// `as_u8` values of the domain enums.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub role: i16,
    pub account_status: i16,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::supervisors::Entity")]
    Supervisor,
    #[sea_orm(has_many = "super::interns::Entity")]
    Interns,
}

impl Related<super::supervisors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supervisor.def()
    }
}

impl Related<super::interns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Interns.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
