pub use sea_orm_migration::prelude::*;

mod m20220901_000001_create_user_table;
mod m20220901_000002_create_attendance_table;
mod m20220901_000003_create_activity_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220901_000001_create_user_table::Migration),
            Box::new(m20220901_000002_create_attendance_table::Migration),
            Box::new(m20220901_000003_create_activity_table::Migration),
        ]
    }
}
