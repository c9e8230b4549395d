// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::search_record_repo_impl::SearchRecordRepositoryImpl;
use crate::presentation::handlers::search_handler;
use axum::{
    routing::{get, post},
    Router,
};

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route(
            "/update_search",
            post(search_handler::update_search::<SearchRecordRepositoryImpl>),
        )
        .route(
            "/trending",
            get(search_handler::trending::<SearchRecordRepositoryImpl>),
        )
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
