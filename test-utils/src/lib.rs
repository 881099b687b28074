//! Attendance Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the attendance
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories inserting rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_attendance_operations() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new()
//!         .with_attendance_tables()
//!         .build()
//!         .await?;
//!
//!     let (db, session) = test.db_and_session().await?;
//!     // Perform database and session operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
