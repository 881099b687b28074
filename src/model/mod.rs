//! API data transfer objects shared by every endpoint.

pub mod activity;
pub mod api;
pub mod attendance;
pub mod user;
