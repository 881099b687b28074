pub use super::activity::Entity as Activity;
pub use super::attendance::Entity as Attendance;
pub use super::user::Entity as User;
