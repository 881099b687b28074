use sea_orm_migration::{prelude::*, schema::*};

use super::m20220901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(string(Activity::Id).primary_key())
                    .col(integer(Activity::UserId))
                    .col(text(Activity::Description))
                    .col(date(Activity::DateCreated))
                    .col(time(Activity::TimeCreated))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_user_id")
                            .from(Activity::Table, Activity::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_user_id_date_created")
                    .table(Activity::Table)
                    .col(Activity::UserId)
                    .col(Activity::DateCreated)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Activity {
    Table,
    Id,
    UserId,
    Description,
    DateCreated,
    TimeCreated,
}
