// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json, Query},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::dto::trending_request::TrendingQueryDto,
    application::dto::update_search_request::UpdateSearchRequestDto,
    config::settings::Settings,
    domain::{
        repositories::search_record_repository::SearchRecordRepository,
        services::trending_service::{TrendingService, TrendingServiceError},
    },
    presentation::errors::AppError,
};

/// 处理搜索记录请求
///
/// # 参数
///
/// * `repo` - 搜索记录仓库实例
/// * `settings` - 应用配置
/// * `payload` - 搜索记录请求数据
///
/// # 返回值
///
/// 成功时返回 `{"success": true}`
///
/// # 错误
///
/// 可能在以下情况下返回错误响应：
/// - 请求参数校验失败
/// - 仓库操作失败
pub async fn update_search<R>(
    Extension(repo): Extension<Arc<R>>,
    Extension(settings): Extension<Arc<Settings>>,
    Json(payload): Json<UpdateSearchRequestDto>,
) -> impl IntoResponse
where
    R: SearchRecordRepository + 'static,
{
    let service = TrendingService::new(repo, settings);
    match service.record_search(payload).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 处理热搜榜查询请求
///
/// 按累计搜索次数降序返回记录，空库返回空数组
pub async fn trending<R>(
    Extension(repo): Extension<Arc<R>>,
    Extension(settings): Extension<Arc<Settings>>,
    Query(params): Query<TrendingQueryDto>,
) -> Result<impl IntoResponse, AppError>
where
    R: SearchRecordRepository + 'static,
{
    let service = TrendingService::new(repo, settings);
    let entries = service.trending(params).await?;
    Ok((StatusCode::OK, Json(entries)))
}

impl From<TrendingServiceError> for (StatusCode, String) {
    fn from(err: TrendingServiceError) -> Self {
        match err {
            TrendingServiceError::Validation(details) => (StatusCode::BAD_REQUEST, details),
            TrendingServiceError::Repository(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
