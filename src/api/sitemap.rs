//! # 路由登记与站点地图
//!
//! 所有路由都通过 [`RouteRegistry`] 注册，注册时同时记录方法与路径，
//! 根路径的 HTML 站点地图由这份记录生成，不会与实际路由脱节。

use axum::Router;
use axum::handler::Handler;
use axum::routing::{MethodFilter, on};
use std::fmt;

/// 路由使用的 HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    #[must_use]
    pub const fn filter(self) -> MethodFilter {
        match self {
            Self::Get => MethodFilter::GET,
            Self::Post => MethodFilter::POST,
            Self::Patch => MethodFilter::PATCH,
            Self::Delete => MethodFilter::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已注册的路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: HttpMethod,
    pub path: &'static str,
}

impl RouteEntry {
    /// 无路径参数的 GET 路由可以直接作为链接打开
    #[must_use]
    pub fn is_linkable(&self) -> bool {
        self.method == HttpMethod::Get && !self.path.contains('{')
    }
}

/// 记录注册信息的路由构建器
pub struct RouteRegistry<S> {
    router: Router<S>,
    entries: Vec<RouteEntry>,
}

impl<S> Default for RouteRegistry<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RouteRegistry<S>
where
    S: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            entries: Vec::new(),
        }
    }

    /// 注册一条路由。同一路径多次注册时方法会合并
    #[must_use]
    pub fn route<H, T>(mut self, method: HttpMethod, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.router = self.router.route(path, on(method.filter(), handler));
        self.entries.push(RouteEntry { method, path });
        self
    }

    #[must_use]
    pub fn into_parts(self) -> (Router<S>, Vec<RouteEntry>) {
        (self.router, self.entries)
    }
}

/// 站点地图
#[derive(Debug, Clone, Default)]
pub struct Sitemap {
    entries: Vec<RouteEntry>,
}

impl Sitemap {
    #[must_use]
    pub fn new(mut entries: Vec<RouteEntry>) -> Self {
        entries.sort_by(|a, b| a.path.cmp(b.path).then(a.method.as_str().cmp(b.method.as_str())));
        Self { entries }
    }

    /// 渲染 HTML 页面
    #[must_use]
    pub fn render_html(&self) -> String {
        let mut items = String::new();
        for entry in &self.entries {
            let path = escape_html(entry.path);
            if entry.is_linkable() {
                items.push_str(&format!(
                    "      <li><code>{}</code> <a href=\"{path}\">{path}</a></li>\n",
                    entry.method
                ));
            } else {
                items.push_str(&format!(
                    "      <li><code>{}</code> {path}</li>\n",
                    entry.method
                ));
            }
        }

        format!(
            "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    <title>Star Wars API</title>\n  </head>\n  <body>\n    <h1>Star Wars API</h1>\n    <p>Available endpoints:</p>\n    <ul>\n{items}    </ul>\n  </body>\n</html>\n"
        )
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn noop() {}

    #[test]
    fn registry_records_every_route() {
        let registry = RouteRegistry::<()>::new()
            .route(HttpMethod::Get, "/people", noop)
            .route(HttpMethod::Post, "/people", noop)
            .route(HttpMethod::Delete, "/people/{id}", noop);

        let (_router, entries) = registry.into_parts();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].method, HttpMethod::Post);
    }

    #[test]
    fn only_parameterless_get_routes_are_links() {
        let sitemap = Sitemap::new(vec![
            RouteEntry {
                method: HttpMethod::Get,
                path: "/planets/{id}",
            },
            RouteEntry {
                method: HttpMethod::Post,
                path: "/user",
            },
            RouteEntry {
                method: HttpMethod::Get,
                path: "/planets",
            },
        ]);

        let html = sitemap.render_html();
        assert_eq!(html.matches("<a href=").count(), 1);
        assert!(html.contains("<a href=\"/planets\">/planets</a>"));
        assert!(html.contains("<code>GET</code> /planets/{id}</li>"));
        assert!(html.contains("<code>POST</code> /user</li>"));
    }

    #[test]
    fn html_lists_all_entries_sorted() {
        let sitemap = Sitemap::new(vec![
            RouteEntry {
                method: HttpMethod::Get,
                path: "/user",
            },
            RouteEntry {
                method: HttpMethod::Delete,
                path: "/favorite/planet/{planet_id}",
            },
        ]);

        let html = sitemap.render_html();
        assert!(html.contains("<a href=\"/user\">/user</a>"));
        assert!(html.contains("<code>DELETE</code> /favorite/planet/{planet_id}"));
        let favorite = html.find("/favorite/planet").unwrap();
        let user = html.find("/user").unwrap();
        assert!(favorite < user);
    }
}
