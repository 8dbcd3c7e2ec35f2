//! # 用户服务
//!
//! 用户表的增删改查。密码原样存储，不参与任何登录逻辑。

use entity::{User, user};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use serde::Deserialize;

use crate::error::{Context, Result};
use crate::not_found;

/// 创建用户请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// 更新用户请求，只修改出现的字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

/// 用户服务
pub struct UsersService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsersService<'a> {
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// 按主键顺序列出全部用户
    pub async fn list(&self) -> Result<Vec<user::Model>> {
        User::find()
            .order_by_asc(user::Column::Id)
            .all(self.db)
            .await
            .context("Failed to list users")
    }

    /// 获取单个用户
    pub async fn get(&self, id: i32) -> Result<user::Model> {
        User::find_by_id(id)
            .one(self.db)
            .await
            .context("Failed to fetch user")?
            .ok_or_else(|| not_found!("user", id))
    }

    /// 创建用户，邮箱重复时返回冲突
    pub async fn create(&self, request: &CreateUserRequest) -> Result<user::Model> {
        let model = user::ActiveModel {
            id: NotSet,
            first_name: Set(request.first_name.clone()),
            last_name: Set(request.last_name.clone()),
            email: Set(request.email.clone()),
            password: Set(request.password.clone()),
            is_active: Set(request.is_active),
        };

        model
            .insert(self.db)
            .await
            .with_context(|| format!("Failed to create user {}", request.email))
    }

    /// 更新用户
    pub async fn update(&self, id: i32, request: &UpdateUserRequest) -> Result<user::Model> {
        let existing = self.get(id).await?;
        let mut model: user::ActiveModel = existing.clone().into();

        if let Some(first_name) = &request.first_name {
            model.first_name = Set(first_name.clone());
        }
        if let Some(last_name) = &request.last_name {
            model.last_name = Set(last_name.clone());
        }
        if let Some(email) = &request.email {
            model.email = Set(email.clone());
        }
        if let Some(password) = &request.password {
            model.password = Set(password.clone());
        }
        if let Some(is_active) = request.is_active {
            model.is_active = Set(is_active);
        }

        if !model.is_changed() {
            return Ok(existing);
        }

        model
            .update(self.db)
            .await
            .with_context(|| format!("Failed to update user {id}"))
    }

    /// 删除用户。仍有收藏记录时受外键约束，返回冲突
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = User::delete_by_id(id)
            .exec(self.db)
            .await
            .with_context(|| format!("Failed to delete user {id}"))?;

        if result.rows_affected == 0 {
            return Err(not_found!("user", id));
        }
        Ok(())
    }
}
