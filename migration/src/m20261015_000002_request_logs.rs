//! Request log table
//!
//! One row per bookmark read: which bookmark, from which address, and when.

use sea_orm_migration::prelude::*;

use crate::m20261015_000001_initial_tables::Bookmarks;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Requests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Requests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Requests::BookmarkId).string_len(6).not_null())
                    .col(ColumnDef::new(Requests::Ip).string_len(45).null())
                    .col(
                        ColumnDef::new(Requests::AccessedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requests_bookmark_id")
                            .from(Requests::Table, Requests::BookmarkId)
                            .to(Bookmarks::Table, Bookmarks::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_requests_bookmark_id")
                    .table(Requests::Table)
                    .col(Requests::BookmarkId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_requests_bookmark_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Requests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Requests {
    #[sea_orm(iden = "requests")]
    Table,
    Id,
    BookmarkId,
    Ip,
    AccessedAt,
}
