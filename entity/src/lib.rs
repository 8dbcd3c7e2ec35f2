//! # Entity 模块
//!
//! 包含所有 Sea-ORM 实体定义

pub mod favorites_people;
pub mod favorites_planets;
pub mod people;
pub mod planets;
pub mod user;

pub use favorites_people::Entity as FavoritesPeople;
pub use favorites_planets::Entity as FavoritesPlanets;
pub use people::Entity as People;
pub use planets::Entity as Planets;
pub use user::Entity as User;
