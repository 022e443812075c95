//! Cross-cutting pieces shared by the internship services: tracing setup,
//! HTTP middleware and wire formats.

pub mod middleware;
pub mod serde;
pub mod tracing;
