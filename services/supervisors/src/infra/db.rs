use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, RuntimeErr, SqlErr,
    TransactionError, TransactionTrait, sqlx,
};
use uuid::Uuid;

use internship_domain::intern::InternStatus;
use internship_domain::user::{AccountStatus, UserRole};
use internship_supervisors_schema::{interns, supervisors, users};

use crate::domain::repository::{InternRepository, SupervisorRepository, UserRepository};
use crate::domain::types::{Intern, Supervisor, User};
use crate::error::SupervisorsServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: Arc<DatabaseConnection>,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, SupervisorsServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn list_by_role(&self, role: UserRole) -> Result<Vec<User>, SupervisorsServiceError> {
        let models = users::Entity::find()
            .filter(users::Column::Role.eq(i16::from(role.as_u8())))
            .order_by_asc(users::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list users by role")?;
        models.into_iter().map(user_from_model).collect()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, SupervisorsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .context("find user by email")?;
        Ok(model.is_some())
    }

    async fn update(&self, user: &User) -> Result<(), SupervisorsServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            department: Set(user.department.clone()),
            phone: Set(user.phone.clone()),
            role: Set(i16::from(user.role.as_u8())),
            account_status: Set(i16::from(user.account_status.as_u8())),
            updated_at: Set(user.updated_at),
            ..Default::default()
        }
        .update(self.db.as_ref())
        .await
        .map_err(|e| write_error(e, "update user"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, SupervisorsServiceError> {
        let result = users::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> Result<User, SupervisorsServiceError> {
    let role = u8::try_from(model.role)
        .ok()
        .and_then(UserRole::from_u8)
        .with_context(|| format!("user {} has unknown role {}", model.id, model.role))?;
    let account_status = u8::try_from(model.account_status)
        .ok()
        .and_then(AccountStatus::from_u8)
        .with_context(|| {
            format!(
                "user {} has unknown account status {}",
                model.id, model.account_status
            )
        })?;
    Ok(User {
        id: model.id,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        department: model.department,
        phone: model.phone,
        role,
        account_status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Supervisor repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSupervisorRepository {
    pub db: Arc<DatabaseConnection>,
}

impl SupervisorRepository for DbSupervisorRepository {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Supervisor>, SupervisorsServiceError> {
        let model = supervisors::Entity::find()
            .filter(supervisors::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .context("find supervisor by user id")?;
        Ok(model.map(supervisor_from_model))
    }

    async fn create_with_user(
        &self,
        user: &User,
        supervisor: &Supervisor,
    ) -> Result<(), SupervisorsServiceError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                let user = user.clone();
                let supervisor = supervisor.clone();
                Box::pin(async move {
                    insert_user(txn, &user).await?;
                    insert_supervisor(txn, &supervisor).await?;
                    Ok(())
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(e) | TransactionError::Transaction(e) => {
                    write_error(e, "create supervisor with user")
                }
            })
    }
}

async fn insert_user(txn: &DatabaseTransaction, user: &User) -> Result<(), DbErr> {
    users::ActiveModel {
        id: Set(user.id),
        email: Set(user.email.clone()),
        first_name: Set(user.first_name.clone()),
        last_name: Set(user.last_name.clone()),
        department: Set(user.department.clone()),
        phone: Set(user.phone.clone()),
        role: Set(i16::from(user.role.as_u8())),
        account_status: Set(i16::from(user.account_status.as_u8())),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_supervisor(
    txn: &DatabaseTransaction,
    supervisor: &Supervisor,
) -> Result<(), DbErr> {
    supervisors::ActiveModel {
        id: Set(supervisor.id),
        user_id: Set(supervisor.user_id),
        department: Set(supervisor.department.clone()),
        specialization: Set(supervisor.specialization.clone()),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn supervisor_from_model(model: supervisors::Model) -> Supervisor {
    Supervisor {
        id: model.id,
        user_id: model.user_id,
        department: model.department,
        specialization: model.specialization,
    }
}

// ── Intern repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbInternRepository {
    pub db: Arc<DatabaseConnection>,
}

impl InternRepository for DbInternRepository {
    async fn list_by_supervisor_id(
        &self,
        supervisor_id: Uuid,
    ) -> Result<Vec<Intern>, SupervisorsServiceError> {
        let models = interns::Entity::find()
            .filter(interns::Column::SupervisorId.eq(supervisor_id))
            .order_by_asc(interns::Column::StartDate)
            .all(self.db.as_ref())
            .await
            .context("list interns by supervisor id")?;
        models.into_iter().map(intern_from_model).collect()
    }

    async fn count_by_supervisor_id(
        &self,
        supervisor_id: Uuid,
    ) -> Result<u64, SupervisorsServiceError> {
        let count = interns::Entity::find()
            .filter(interns::Column::SupervisorId.eq(supervisor_id))
            .count(self.db.as_ref())
            .await
            .context("count interns by supervisor id")?;
        Ok(count)
    }
}

fn intern_from_model(model: interns::Model) -> Result<Intern, SupervisorsServiceError> {
    let status = u8::try_from(model.status)
        .ok()
        .and_then(InternStatus::from_u8)
        .with_context(|| format!("intern {} has unknown status {}", model.id, model.status))?;
    Ok(Intern {
        id: model.id,
        user_id: model.user_id,
        supervisor_id: model.supervisor_id,
        school: model.school,
        department: model.department,
        start_date: model.start_date,
        end_date: model.end_date,
        status,
    })
}

/// Map a failed write. `users.email` is the only unique column a caller
/// controls, so any unique violation is a duplicate email.
fn write_error(err: DbErr, context: &'static str) -> SupervisorsServiceError {
    if is_unique_violation(&err) {
        return SupervisorsServiceError::EmailExists;
    }
    anyhow::Error::new(err).context(context).into()
}

fn is_unique_violation(err: &DbErr) -> bool {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e))) => {
            e.is_unique_violation()
        }
        _ => matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))),
    }
}
