//! Domain types shared across the internship-management services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; `infra/` converts them to and
//! from their stored integer form.

pub mod intern;
pub mod user;
