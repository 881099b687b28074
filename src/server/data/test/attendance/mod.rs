use crate::server::{
    data::attendance::AttendanceRepository,
    model::attendance::{AttendanceLabel, CreateAttendanceParam},
};
use chrono::{NaiveTime, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_user;
mod has_check_in_on;
