//! # 系统处理器

use axum::extract::Extension;
use axum::response::{Html, Response};
use std::sync::Arc;

use crate::api::response;
use crate::api::sitemap::Sitemap;

/// 存活探针
pub async fn ping_handler() -> &'static str {
    "pong"
}

/// 根路径：列出全部路由的 HTML 站点地图
pub async fn sitemap_handler(Extension(sitemap): Extension<Arc<Sitemap>>) -> Html<String> {
    Html(sitemap.render_html())
}

/// 未匹配的路由
pub async fn fallback_handler() -> Response {
    response::not_found()
}
