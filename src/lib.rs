//! # Star Wars API Library
//!
//! 星球大战人物、星球、用户与收藏的 CRUD REST 服务核心库

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use api::{ApiServer, AppState, build_router};
pub use config::AppConfig;
pub use error::{ApiError, Result};
