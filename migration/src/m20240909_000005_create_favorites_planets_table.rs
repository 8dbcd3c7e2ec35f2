use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritesPlanets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoritesPlanets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FavoritesPlanets::UserId).integer().null())
                    .col(
                        ColumnDef::new(FavoritesPlanets::PlanetId)
                            .integer()
                            .null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planets_user_id")
                            .from(FavoritesPlanets::Table, FavoritesPlanets::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planets_planet_id")
                            .from(FavoritesPlanets::Table, FavoritesPlanets::PlanetId)
                            .to(Planets::Table, Planets::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritesPlanets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FavoritesPlanets {
    Table,
    Id,
    UserId,
    PlanetId,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
}
