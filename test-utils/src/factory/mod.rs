//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let check_in = factory::create_check_in(&db, user.id).await?;
//! let activity = factory::create_activity(&db, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("a@x.com")
//!     .password("pw")
//!     .build()
//!     .await?;
//!
//! let yesterday = Utc::now().date_naive().pred_opt().unwrap();
//! let old_check_in = factory::attendance::AttendanceFactory::new(&db, user.id)
//!     .date(yesterday)
//!     .build()
//!     .await?;
//! ```

pub mod activity;
pub mod attendance;
pub mod helpers;
pub mod user;

pub use activity::create_activity;
pub use attendance::{create_check_in, create_check_out};
pub use user::create_user;
