use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // people_id 是全局唯一，沿用既有表结构
        manager
            .create_table(
                Table::create()
                    .table(FavoritesPeople::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoritesPeople::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FavoritesPeople::UserId).integer().null())
                    .col(
                        ColumnDef::new(FavoritesPeople::PeopleId)
                            .integer()
                            .null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_people_user_id")
                            .from(FavoritesPeople::Table, FavoritesPeople::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_people_people_id")
                            .from(FavoritesPeople::Table, FavoritesPeople::PeopleId)
                            .to(People::Table, People::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritesPeople::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FavoritesPeople {
    Table,
    Id,
    UserId,
    PeopleId,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
}
