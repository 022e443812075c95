use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use internship_domain::user::{AccountStatus, UserRole};

use crate::domain::repository::{InternRepository, SupervisorRepository, UserRepository};
use crate::domain::types::{Intern, Supervisor, SupervisorPatch, SupervisorSummary, User};
use crate::error::SupervisorsServiceError;

pub struct CreateSupervisorInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub phone: Option<String>,
}

/// Read and write operations on supervisor records.
///
/// Every method fails fast: all checks run before the first write, and each
/// write path issues a single atomic store call.
pub struct SupervisorDirectory<U, S, I>
where
    U: UserRepository,
    S: SupervisorRepository,
    I: InternRepository,
{
    pub users: U,
    pub supervisors: S,
    pub interns: I,
}

impl<U, S, I> SupervisorDirectory<U, S, I>
where
    U: UserRepository,
    S: SupervisorRepository,
    I: InternRepository,
{
    pub fn new(users: U, supervisors: S, interns: I) -> Self {
        Self {
            users,
            supervisors,
            interns,
        }
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    pub async fn list_all(&self) -> Result<Vec<SupervisorSummary>, SupervisorsServiceError> {
        let users = self.users.list_by_role(UserRole::Supervisor).await?;
        debug!(count = users.len(), "listing supervisors");
        let mut summaries = Vec::with_capacity(users.len());
        for user in users {
            summaries.push(self.summarize(user).await?);
        }
        Ok(summaries)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<SupervisorSummary, SupervisorsServiceError> {
        let user = self.find_supervisor_user(id).await?;
        self.summarize(user).await
    }

    /// Look up through the extension record. The summary's `id` is the
    /// extension id, not `user_id`.
    pub async fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<SupervisorSummary, SupervisorsServiceError> {
        let supervisor = self.find_extension(user_id).await?;
        let user = self
            .users
            .find_by_id(supervisor.user_id)
            .await?
            .ok_or(SupervisorsServiceError::SupervisorNotFound)?;
        let intern_count = self.interns.count_by_supervisor_id(supervisor.id).await?;
        Ok(SupervisorSummary::from_user(supervisor.id, user, intern_count))
    }

    pub async fn list_interns(&self, user_id: Uuid) -> Result<Vec<Intern>, SupervisorsServiceError> {
        let supervisor = self.find_extension(user_id).await?;
        self.interns.list_by_supervisor_id(supervisor.id).await
    }

    pub async fn intern_count(&self, user_id: Uuid) -> Result<u64, SupervisorsServiceError> {
        let supervisor = self.find_extension(user_id).await?;
        self.interns.count_by_supervisor_id(supervisor.id).await
    }

    // ── Writes ───────────────────────────────────────────────────────────────

    pub async fn create(
        &self,
        input: CreateSupervisorInput,
    ) -> Result<SupervisorSummary, SupervisorsServiceError> {
        // 1. Email must be unused → 409
        if self.users.exists_by_email(&input.email).await? {
            return Err(SupervisorsServiceError::EmailExists);
        }

        // 2. Department must be present and non-empty → 400
        let department = match input.department {
            Some(department) if !department.is_empty() => department,
            _ => return Err(SupervisorsServiceError::DepartmentRequired),
        };

        // 3. User + extension in one transaction. Specialization mirrors the
        //    department until it gets its own input field.
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            department: Some(department.clone()),
            phone: input.phone,
            role: UserRole::Supervisor,
            account_status: AccountStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        let supervisor = Supervisor {
            id: Uuid::now_v7(),
            user_id: user.id,
            department: department.clone(),
            specialization: department,
        };
        self.supervisors.create_with_user(&user, &supervisor).await?;

        info!(user_id = %user.id, supervisor_id = %supervisor.id, "supervisor created");
        Ok(SupervisorSummary::from_user(user.id, user, 0))
    }

    pub async fn update(
        &self,
        id: Uuid,
        patch: SupervisorPatch,
    ) -> Result<SupervisorSummary, SupervisorsServiceError> {
        let mut user = self.find_supervisor_user(id).await?;

        if let Some(email) = patch.email.as_deref() {
            if email != user.email && self.users.exists_by_email(email).await? {
                return Err(SupervisorsServiceError::EmailExists);
            }
        }

        patch.apply_to(&mut user);
        user.updated_at = Utc::now().max(user.updated_at);
        self.users.update(&user).await?;

        info!(user_id = %user.id, "supervisor updated");
        self.summarize(user).await
    }

    /// Delete the owning user. The extension row goes with it through the
    /// `ON DELETE CASCADE` foreign key.
    pub async fn delete(&self, user_id: Uuid) -> Result<(), SupervisorsServiceError> {
        let user = self.find_supervisor_user(user_id).await?;
        let supervisor = self.find_extension(user.id).await?;

        if self.interns.count_by_supervisor_id(supervisor.id).await? > 0 {
            return Err(SupervisorsServiceError::HasAssignedInterns);
        }

        if !self.users.delete(user.id).await? {
            return Err(SupervisorsServiceError::SupervisorNotFound);
        }

        info!(user_id = %user.id, supervisor_id = %supervisor.id, "supervisor deleted");
        Ok(())
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    async fn find_supervisor_user(&self, id: Uuid) -> Result<User, SupervisorsServiceError> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(SupervisorsServiceError::SupervisorNotFound)?;
        if user.role != UserRole::Supervisor {
            return Err(SupervisorsServiceError::NotASupervisor);
        }
        Ok(user)
    }

    async fn find_extension(&self, user_id: Uuid) -> Result<Supervisor, SupervisorsServiceError> {
        self.supervisors
            .find_by_user_id(user_id)
            .await?
            .ok_or(SupervisorsServiceError::SupervisorNotFound)
    }

    /// Summary keyed by user id. A supervisor user without an extension row
    /// reports zero interns.
    async fn summarize(&self, user: User) -> Result<SupervisorSummary, SupervisorsServiceError> {
        let intern_count = match self.supervisors.find_by_user_id(user.id).await? {
            Some(supervisor) => self.interns.count_by_supervisor_id(supervisor.id).await?,
            None => 0,
        };
        Ok(SupervisorSummary::from_user(user.id, user, intern_count))
    }
}
