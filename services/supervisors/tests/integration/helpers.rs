use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use internship_domain::intern::InternStatus;
use internship_domain::user::{AccountStatus, UserRole};
use internship_supervisors::domain::repository::{
    InternRepository, SupervisorRepository, UserRepository,
};
use internship_supervisors::domain::types::{Intern, Supervisor, User};
use internship_supervisors::error::SupervisorsServiceError;
use internship_supervisors::usecase::supervisor::{CreateSupervisorInput, SupervisorDirectory};

// ── In-memory store ──────────────────────────────────────────────────────────

/// Rows of the three tables, shared by the mock repositories so a write
/// through one is visible to reads through the others.
#[derive(Default)]
pub struct Store {
    pub users: Vec<User>,
    pub supervisors: Vec<Supervisor>,
    pub interns: Vec<Intern>,
    /// Number of write calls that reached the store.
    pub writes: usize,
}

pub type SharedStore = Arc<Mutex<Store>>;

pub fn new_store() -> SharedStore {
    Arc::new(Mutex::new(Store::default()))
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub store: SharedStore,
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, SupervisorsServiceError> {
        let store = self.store.lock().unwrap();
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_by_role(&self, role: UserRole) -> Result<Vec<User>, SupervisorsServiceError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .users
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, SupervisorsServiceError> {
        let store = self.store.lock().unwrap();
        Ok(store.users.iter().any(|u| u.email == email))
    }

    async fn update(&self, user: &User) -> Result<(), SupervisorsServiceError> {
        let mut store = self.store.lock().unwrap();
        store.writes += 1;
        if store
            .users
            .iter()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(SupervisorsServiceError::EmailExists);
        }
        if let Some(row) = store.users.iter_mut().find(|u| u.id == user.id) {
            *row = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, SupervisorsServiceError> {
        let mut store = self.store.lock().unwrap();
        store.writes += 1;
        let before = store.users.len();
        store.users.retain(|u| u.id != id);
        let deleted = store.users.len() < before;
        if deleted {
            // ON DELETE CASCADE on supervisors.user_id
            let removed: Vec<Uuid> = store
                .supervisors
                .iter()
                .filter(|s| s.user_id == id)
                .map(|s| s.id)
                .collect();
            store.supervisors.retain(|s| s.user_id != id);
            // ON DELETE SET NULL on interns.supervisor_id
            for intern in store.interns.iter_mut() {
                if intern.supervisor_id.is_some_and(|sid| removed.contains(&sid)) {
                    intern.supervisor_id = None;
                }
            }
        }
        Ok(deleted)
    }
}

// ── MockSupervisorRepo ───────────────────────────────────────────────────────

pub struct MockSupervisorRepo {
    pub store: SharedStore,
}

impl SupervisorRepository for MockSupervisorRepo {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Supervisor>, SupervisorsServiceError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .supervisors
            .iter()
            .find(|s| s.user_id == user_id)
            .cloned())
    }

    async fn create_with_user(
        &self,
        user: &User,
        supervisor: &Supervisor,
    ) -> Result<(), SupervisorsServiceError> {
        let mut store = self.store.lock().unwrap();
        store.writes += 1;
        if store.users.iter().any(|u| u.email == user.email) {
            return Err(SupervisorsServiceError::EmailExists);
        }
        store.users.push(user.clone());
        store.supervisors.push(supervisor.clone());
        Ok(())
    }
}

// ── MockInternRepo ───────────────────────────────────────────────────────────

pub struct MockInternRepo {
    pub store: SharedStore,
}

impl InternRepository for MockInternRepo {
    async fn list_by_supervisor_id(
        &self,
        supervisor_id: Uuid,
    ) -> Result<Vec<Intern>, SupervisorsServiceError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .interns
            .iter()
            .filter(|i| i.supervisor_id == Some(supervisor_id))
            .cloned()
            .collect())
    }

    async fn count_by_supervisor_id(
        &self,
        supervisor_id: Uuid,
    ) -> Result<u64, SupervisorsServiceError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .interns
            .iter()
            .filter(|i| i.supervisor_id == Some(supervisor_id))
            .count() as u64)
    }
}

pub type MockDirectory = SupervisorDirectory<MockUserRepo, MockSupervisorRepo, MockInternRepo>;

pub fn directory(store: &SharedStore) -> MockDirectory {
    SupervisorDirectory::new(
        MockUserRepo {
            store: Arc::clone(store),
        },
        MockSupervisorRepo {
            store: Arc::clone(store),
        },
        MockInternRepo {
            store: Arc::clone(store),
        },
    )
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn create_input(email: &str, department: Option<&str>) -> CreateSupervisorInput {
    CreateSupervisorInput {
        email: email.to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        department: department.map(str::to_owned),
        phone: Some("555-0000".to_owned()),
    }
}

/// Insert a user with the given role directly into the store.
pub fn seed_user(store: &SharedStore, email: &str, role: UserRole) -> User {
    let now = Utc::now();
    let user = User {
        id: Uuid::now_v7(),
        email: email.to_owned(),
        first_name: "Alan".to_owned(),
        last_name: "Turing".to_owned(),
        department: None,
        phone: None,
        role,
        account_status: AccountStatus::Active,
        created_at: now,
        updated_at: now,
    };
    store.lock().unwrap().users.push(user.clone());
    user
}

/// Assign a fresh intern to `supervisor_id`.
pub fn seed_intern(store: &SharedStore, supervisor_id: Uuid) -> Intern {
    let intern_user = seed_user(
        store,
        &format!("intern-{}@example.com", Uuid::now_v7()),
        UserRole::Intern,
    );
    let intern = Intern {
        id: Uuid::now_v7(),
        user_id: intern_user.id,
        supervisor_id: Some(supervisor_id),
        school: "INPT".to_owned(),
        department: "CS".to_owned(),
        start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 8, 29).unwrap(),
        status: InternStatus::Active,
    };
    store.lock().unwrap().interns.push(intern.clone());
    intern
}

pub fn extension_of(store: &SharedStore, user_id: Uuid) -> Supervisor {
    store
        .lock()
        .unwrap()
        .supervisors
        .iter()
        .find(|s| s.user_id == user_id)
        .cloned()
        .unwrap()
}

pub fn writes(store: &SharedStore) -> usize {
    store.lock().unwrap().writes
}
