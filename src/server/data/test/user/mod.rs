use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, CredentialLookup},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_email;
mod verify_credential;
