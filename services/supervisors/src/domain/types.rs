use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use internship_domain::intern::InternStatus;
use internship_domain::user::{AccountStatus, UserRole};

/// Identity record; supervisors, interns and admins all share this table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub account_status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Supervisor extension record, linked 1:1 to a [`User`] with the supervisor role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supervisor {
    pub id: Uuid,
    pub user_id: Uuid,
    pub department: String,
    pub specialization: String,
}

/// An intern, optionally assigned to a supervisor extension record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intern {
    pub id: Uuid,
    pub user_id: Uuid,
    pub supervisor_id: Option<Uuid>,
    pub school: String,
    pub department: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: InternStatus,
}

/// User fields plus the number of interns assigned to the supervisor.
///
/// `id` is the user id, except when looked up by user id, where it carries
/// the supervisor extension id instead. Clients depend on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorSummary {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub account_status: AccountStatus,
    pub intern_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupervisorSummary {
    pub fn from_user(id: Uuid, user: User, intern_count: u64) -> Self {
        Self {
            id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            department: user.department,
            phone: user.phone,
            role: user.role,
            account_status: user.account_status,
            intern_count,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Fields a caller may change on a supervisor. `None` leaves the stored value
/// untouched, so a field cannot be cleared through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupervisorPatch {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
}

impl SupervisorPatch {
    /// Overwrite the supplied fields on `user`. Email uniqueness is the
    /// caller's concern.
    pub fn apply_to(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(department) = self.department {
            user.department = Some(department);
        }
        if let Some(phone) = self.phone {
            user.phone = Some(phone);
        }
    }
}
