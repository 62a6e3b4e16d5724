use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agrovets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Agrovets::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Agrovets::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Agrovets::BusinessName).string().not_null())
                    .col(
                        ColumnDef::new(Agrovets::RegistrationNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Agrovets::Location).string().not_null())
                    .col(
                        ColumnDef::new(Agrovets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Agrovets::Table, Agrovets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Agrovets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Agrovets {
    Table,
    Id,
    UserId,
    BusinessName,
    RegistrationNumber,
    Location,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
