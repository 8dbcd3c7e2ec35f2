//! # 服务层
//!
//! 每个实体一个 service，借用数据库连接完成单条查询或写入，供 HTTP handler 复用。

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;

pub use favorites::{
    CreateFavoriteRequest, FavoritePersonRow, FavoritePlanetRow, FavoritesService,
    UpdateFavoritePersonRequest, UpdateFavoritePlanetRequest, UserFavorites,
};
pub use people::{CreatePersonRequest, PeopleService, UpdatePersonRequest};
pub use planets::{CreatePlanetRequest, PlanetsService, UpdatePlanetRequest};
pub use users::{CreateUserRequest, UpdateUserRequest, UsersService};
