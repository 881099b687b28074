//! SeaORM entity models for the attendance tracker.
//!
//! Each module maps one database table. Rows are converted into server domain
//! models at the repository boundary and never leave the data layer directly.

pub mod prelude;

pub mod activity;
pub mod attendance;
pub mod user;
