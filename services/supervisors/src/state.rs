use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::db::{DbInternRepository, DbSupervisorRepository, DbUserRepository};
use crate::usecase::supervisor::SupervisorDirectory;

pub type DbSupervisorDirectory =
    SupervisorDirectory<DbUserRepository, DbSupervisorRepository, DbInternRepository>;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn supervisor_repo(&self) -> DbSupervisorRepository {
        DbSupervisorRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn intern_repo(&self) -> DbInternRepository {
        DbInternRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn supervisor_directory(&self) -> DbSupervisorDirectory {
        SupervisorDirectory::new(self.user_repo(), self.supervisor_repo(), self.intern_repo())
    }
}
