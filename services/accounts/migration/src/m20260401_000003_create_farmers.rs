use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Farmers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Farmers::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Farmers::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Farmers::RegisteredBy).uuid().not_null())
                    .col(ColumnDef::new(Farmers::FarmLocation).string().not_null())
                    .col(
                        ColumnDef::new(Farmers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Farmers::Table, Farmers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Farmers::Table, Farmers::RegisteredBy)
                            .to(Agrovets::Table, Agrovets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Farmers::Table)
                    .col(Farmers::RegisteredBy)
                    .name("idx_farmers_registered_by")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Farmers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Farmers {
    Table,
    Id,
    UserId,
    RegisteredBy,
    FarmLocation,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Agrovets {
    Table,
    Id,
}
