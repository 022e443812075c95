use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Supervisors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Supervisors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Supervisors::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Supervisors::Department).string().not_null())
                    .col(
                        ColumnDef::new(Supervisors::Specialization)
                            .string()
                            .not_null(),
                    )
                    // Deleting the owning user removes the extension row.
                    .foreign_key(
                        ForeignKey::create()
                            .from(Supervisors::Table, Supervisors::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Supervisors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Supervisors {
    Table,
    Id,
    UserId,
    Department,
    Specialization,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
