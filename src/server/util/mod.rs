pub mod id;
pub mod parse;
pub mod password;
pub mod time;
pub mod validate;
