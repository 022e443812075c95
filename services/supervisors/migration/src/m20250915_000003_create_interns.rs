use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Interns::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Interns::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Interns::UserId).uuid().not_null())
                    .col(ColumnDef::new(Interns::SupervisorId).uuid().null())
                    .col(ColumnDef::new(Interns::School).string().not_null())
                    .col(ColumnDef::new(Interns::Department).string().not_null())
                    .col(ColumnDef::new(Interns::StartDate).date().not_null())
                    .col(ColumnDef::new(Interns::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Interns::Status)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Interns::Table, Interns::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Interns::Table, Interns::SupervisorId)
                            .to(Supervisors::Table, Supervisors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Interns::Table)
                    .col(Interns::SupervisorId)
                    .name("idx_interns_supervisor_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Interns::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Interns {
    Table,
    Id,
    UserId,
    SupervisorId,
    School,
    Department,
    StartDate,
    EndDate,
    Status,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Supervisors {
    Table,
    Id,
}
