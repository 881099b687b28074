//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the attendance tracker: API endpoints,
//! business rules, data access, and infrastructure. The backend uses Axum as the web
//! framework, SeaORM for database operations, and tower-sessions for cookie sessions
//! stored in the same database.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules such as the same-day check-in policy
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, hashing cost)
//! - **Startup** (`startup`) - Database, migrations, session store, seeding, shutdown
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to a controller
//! 2. **Controller** parses path, query and body, then runs the `AuthGuard`
//! 3. **Service** enforces business rules and orchestrates data operations
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts domain models to DTOs wrapped in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
