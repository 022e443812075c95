pub mod health;
pub mod supervisor;
