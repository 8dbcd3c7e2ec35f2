//! # 星球服务

use entity::{Planets, planets};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use serde::Deserialize;

use crate::error::{Context, Result};
use crate::not_found;

/// 创建星球请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanetRequest {
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

/// 更新星球请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlanetRequest {
    pub name: Option<String>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i32>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
}

/// 星球服务
pub struct PlanetsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetsService<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<planets::Model>> {
        Planets::find()
            .order_by_asc(planets::Column::Id)
            .all(self.db)
            .await
            .context("Failed to list planets")
    }

    pub async fn get(&self, id: i32) -> Result<planets::Model> {
        Planets::find_by_id(id)
            .one(self.db)
            .await
            .context("Failed to fetch planet")?
            .ok_or_else(|| not_found!("planet", id))
    }

    pub async fn create(&self, request: &CreatePlanetRequest) -> Result<planets::Model> {
        let model = planets::ActiveModel {
            id: NotSet,
            name: Set(request.name.clone()),
            diameter: Set(request.diameter),
            rotation_period: Set(request.rotation_period),
            orbital_period: Set(request.orbital_period),
            gravity: Set(request.gravity.clone()),
            population: Set(request.population),
            climate: Set(request.climate.clone()),
            terrain: Set(request.terrain.clone()),
            surface_water: Set(request.surface_water),
        };

        model
            .insert(self.db)
            .await
            .with_context(|| format!("Failed to create planet {}", request.name))
    }

    pub async fn update(&self, id: i32, request: &UpdatePlanetRequest) -> Result<planets::Model> {
        let existing = self.get(id).await?;
        let mut model: planets::ActiveModel = existing.clone().into();

        if let Some(name) = &request.name {
            model.name = Set(name.clone());
        }
        if let Some(diameter) = request.diameter {
            model.diameter = Set(diameter);
        }
        if let Some(rotation_period) = request.rotation_period {
            model.rotation_period = Set(rotation_period);
        }
        if let Some(orbital_period) = request.orbital_period {
            model.orbital_period = Set(orbital_period);
        }
        if let Some(gravity) = &request.gravity {
            model.gravity = Set(gravity.clone());
        }
        if let Some(population) = request.population {
            model.population = Set(population);
        }
        if let Some(climate) = &request.climate {
            model.climate = Set(climate.clone());
        }
        if let Some(terrain) = &request.terrain {
            model.terrain = Set(terrain.clone());
        }
        if let Some(surface_water) = request.surface_water {
            model.surface_water = Set(surface_water);
        }

        if !model.is_changed() {
            return Ok(existing);
        }

        model
            .update(self.db)
            .await
            .with_context(|| format!("Failed to update planet {id}"))
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = Planets::delete_by_id(id)
            .exec(self.db)
            .await
            .with_context(|| format!("Failed to delete planet {id}"))?;

        if result.rows_affected == 0 {
            return Err(not_found!("planet", id));
        }
        Ok(())
    }
}
