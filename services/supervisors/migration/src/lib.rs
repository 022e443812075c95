use sea_orm_migration::prelude::*;

mod m20250915_000001_create_users;
mod m20250915_000002_create_supervisors;
mod m20250915_000003_create_interns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250915_000001_create_users::Migration),
            Box::new(m20250915_000002_create_supervisors::Migration),
            Box::new(m20250915_000003_create_interns::Migration),
        ]
    }
}
