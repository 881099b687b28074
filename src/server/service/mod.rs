//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing the same-day check-in rule and credential checks
//! - **Orchestration**: Coordinating repository calls for a single request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod activity;
pub mod attendance;
pub mod auth;
