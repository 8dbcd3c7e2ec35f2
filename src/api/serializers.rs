//! # 响应序列化
//!
//! 将实体行投影为对外的 JSON 结构。用户响应永远不包含密码；
//! 收藏响应附带关联用户与目标的名称，关联行缺失时为 `null`。

use entity::{people, planets, user};
use serde::Serialize;

use super::services::{FavoritePersonRow, FavoritePlanetRow, UserFavorites};

/// 人物图片地址前缀
pub const PEOPLE_IMAGE_BASE_URL: &str = "https://starwars-visualguide.com/assets/img/characters";

/// 用户响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub is_active: bool,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            full_name: format!("{} {}", user.first_name, user.last_name),
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

/// 带收藏列表的用户详情
#[derive(Debug, Clone, Serialize)]
pub struct UserDetailResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub favorites_planets: Vec<FavoritePlanetResponse>,
    pub favorites_people: Vec<FavoritePersonResponse>,
}

impl UserDetailResponse {
    #[must_use]
    pub fn new(user: user::Model, favorites: UserFavorites) -> Self {
        Self {
            user: user.into(),
            favorites_planets: favorites.planets.into_iter().map(Into::into).collect(),
            favorites_people: favorites.people.into_iter().map(Into::into).collect(),
        }
    }
}

/// 人物响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
}

impl From<people::Model> for PersonResponse {
    fn from(person: people::Model) -> Self {
        Self {
            id: person.id,
            name: person.name,
            gender: person.gender,
            height: person.height,
            mass: person.mass,
            hair_color: person.hair_color,
            skin_color: person.skin_color,
            eye_color: person.eye_color,
            birth_year: person.birth_year,
        }
    }
}

/// 星球响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
    pub gravity: String,
    pub population: i32,
    pub climate: String,
    pub terrain: String,
    pub surface_water: i32,
}

impl From<planets::Model> for PlanetResponse {
    fn from(planet: planets::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            gravity: planet.gravity,
            population: planet.population,
            climate: planet.climate,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
        }
    }
}

/// 收藏星球响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoritePlanetResponse {
    pub id: i32,
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
    /// 收藏者的名
    pub user: Option<String>,
    /// 星球名
    pub planet: Option<String>,
}

impl From<FavoritePlanetRow> for FavoritePlanetResponse {
    fn from(row: FavoritePlanetRow) -> Self {
        Self {
            id: row.favorite.id,
            user_id: row.favorite.user_id,
            planet_id: row.favorite.planet_id,
            user: row.user.map(|u| u.first_name),
            planet: row.planet.map(|p| p.name),
        }
    }
}

/// 收藏人物响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoritePersonResponse {
    pub id: i32,
    pub user_id: Option<i32>,
    pub people_id: Option<i32>,
    pub user: Option<String>,
    pub people: Option<String>,
    pub people_image: Option<String>,
}

impl From<FavoritePersonRow> for FavoritePersonResponse {
    fn from(row: FavoritePersonRow) -> Self {
        Self {
            id: row.favorite.id,
            user_id: row.favorite.user_id,
            people_id: row.favorite.people_id,
            user: row.user.map(|u| u.first_name),
            people: row.person.map(|p| p.name),
            people_image: row.favorite.people_id.map(people_image_url),
        }
    }
}

/// `GET /users/favorites` 响应
#[derive(Debug, Clone, Serialize)]
pub struct FavoritesResponse {
    pub planets: Vec<FavoritePlanetResponse>,
    pub people: Vec<FavoritePersonResponse>,
}

impl From<UserFavorites> for FavoritesResponse {
    fn from(favorites: UserFavorites) -> Self {
        Self {
            planets: favorites.planets.into_iter().map(Into::into).collect(),
            people: favorites.people.into_iter().map(Into::into).collect(),
        }
    }
}

/// 人物图片地址
#[must_use]
pub fn people_image_url(people_id: i32) -> String {
    format!("{PEOPLE_IMAGE_BASE_URL}/{people_id}.jpg")
}
