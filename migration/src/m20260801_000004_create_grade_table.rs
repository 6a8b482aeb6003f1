use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Grade::Table)
                    .if_not_exists()
                    .col(pk_auto(Grade::Id))
                    .col(integer(Grade::StudentId))
                    .col(integer(Grade::SubjectId))
                    .col(double(Grade::Score))
                    .col(timestamp_with_time_zone(Grade::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // At most one grade per (student, subject) pair. The unique index
        // makes the duplicate check hold even when two inserts race.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grade_student_subject")
                    .table(Grade::Table)
                    .col(Grade::StudentId)
                    .col(Grade::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grade::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Grade {
    Table,
    Id,
    StudentId,
    SubjectId,
    Score,
    CreatedAt,
}
