//! sea-orm entities for the tables read and written by the supervisors service.

pub mod interns;
pub mod supervisors;
pub mod users;
