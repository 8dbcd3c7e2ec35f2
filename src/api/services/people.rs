//! # 人物服务

use entity::{People, people};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use serde::Deserialize;

use crate::error::{Context, Result};
use crate::not_found;

/// 创建人物请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePersonRequest {
    pub name: String,
    pub gender: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
}

/// 更新人物请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePersonRequest {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
}

/// 人物服务
pub struct PeopleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleService<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<people::Model>> {
        People::find()
            .order_by_asc(people::Column::Id)
            .all(self.db)
            .await
            .context("Failed to list people")
    }

    pub async fn get(&self, id: i32) -> Result<people::Model> {
        People::find_by_id(id)
            .one(self.db)
            .await
            .context("Failed to fetch person")?
            .ok_or_else(|| not_found!("person", id))
    }

    /// 创建人物，名字重复时返回冲突
    pub async fn create(&self, request: &CreatePersonRequest) -> Result<people::Model> {
        let model = people::ActiveModel {
            id: NotSet,
            name: Set(request.name.clone()),
            gender: Set(request.gender.clone()),
            height: Set(request.height),
            mass: Set(request.mass),
            hair_color: Set(request.hair_color.clone()),
            skin_color: Set(request.skin_color.clone()),
            eye_color: Set(request.eye_color.clone()),
            birth_year: Set(request.birth_year.clone()),
        };

        model
            .insert(self.db)
            .await
            .with_context(|| format!("Failed to create person {}", request.name))
    }

    pub async fn update(&self, id: i32, request: &UpdatePersonRequest) -> Result<people::Model> {
        let existing = self.get(id).await?;
        let mut model: people::ActiveModel = existing.clone().into();

        if let Some(name) = &request.name {
            model.name = Set(name.clone());
        }
        if let Some(gender) = &request.gender {
            model.gender = Set(gender.clone());
        }
        if let Some(height) = request.height {
            model.height = Set(height);
        }
        if let Some(mass) = request.mass {
            model.mass = Set(mass);
        }
        if let Some(hair_color) = &request.hair_color {
            model.hair_color = Set(hair_color.clone());
        }
        if let Some(skin_color) = &request.skin_color {
            model.skin_color = Set(skin_color.clone());
        }
        if let Some(eye_color) = &request.eye_color {
            model.eye_color = Set(eye_color.clone());
        }
        if let Some(birth_year) = &request.birth_year {
            model.birth_year = Set(birth_year.clone());
        }

        if !model.is_changed() {
            return Ok(existing);
        }

        model
            .update(self.db)
            .await
            .with_context(|| format!("Failed to update person {id}"))
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = People::delete_by_id(id)
            .exec(self.db)
            .await
            .with_context(|| format!("Failed to delete person {id}"))?;

        if result.rows_affected == 0 {
            return Err(not_found!("person", id));
        }
        Ok(())
    }
}
