#![allow(async_fn_in_trait)]

use uuid::Uuid;

use internship_domain::user::UserRole;

use crate::domain::types::{Intern, Supervisor, User};
use crate::error::SupervisorsServiceError;

/// Repository for identity records of every role.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, SupervisorsServiceError>;
    async fn list_by_role(&self, role: UserRole) -> Result<Vec<User>, SupervisorsServiceError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, SupervisorsServiceError>;

    /// Persist every mutable column of `user`. Fails with `EmailExists` if the
    /// new email collides with another row.
    async fn update(&self, user: &User) -> Result<(), SupervisorsServiceError>;

    /// Delete a user. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, SupervisorsServiceError>;
}

/// Repository for supervisor extension records.
pub trait SupervisorRepository: Send + Sync {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Supervisor>, SupervisorsServiceError>;

    /// Insert the owning user and its supervisor extension atomically (same transaction).
    async fn create_with_user(
        &self,
        user: &User,
        supervisor: &Supervisor,
    ) -> Result<(), SupervisorsServiceError>;
}

/// Read access to interns by their supervisor assignment.
pub trait InternRepository: Send + Sync {
    async fn list_by_supervisor_id(
        &self,
        supervisor_id: Uuid,
    ) -> Result<Vec<Intern>, SupervisorsServiceError>;

    async fn count_by_supervisor_id(
        &self,
        supervisor_id: Uuid,
    ) -> Result<u64, SupervisorsServiceError>;
}
