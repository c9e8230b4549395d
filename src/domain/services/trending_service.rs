// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::trending_request::{TrendingEntryDto, TrendingQueryDto};
use crate::application::dto::update_search_request::UpdateSearchRequestDto;
use crate::config::settings::Settings;
use crate::domain::repositories::search_record_repository::{
    RepositoryError, SearchRecordRepository,
};
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use validator::Validate;

#[derive(Error, Debug)]
pub enum TrendingServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 热搜服务
///
/// 承载两项业务操作：记录一次搜索、查询热搜榜。
/// 校验在任何存储访问之前完成。
pub struct TrendingService<R> {
    repo: Arc<R>,
    settings: Arc<Settings>,
}

impl<R> TrendingService<R>
where
    R: SearchRecordRepository + 'static,
{
    pub fn new(repo: Arc<R>, settings: Arc<Settings>) -> Self {
        Self { repo, settings }
    }

    /// 记录一次搜索
    ///
    /// 搜索词首次出现时创建计数为1的记录，重复出现时只把计数加1，
    /// 两种情况在仓库层由同一条原子语句完成。
    ///
    /// # 参数
    ///
    /// * `dto` - 搜索记录请求数据
    ///
    /// # 错误
    ///
    /// 可能在以下情况下返回错误：
    /// - 搜索词为空（校验失败，不触及存储）
    /// - 仓库操作失败
    pub async fn record_search(
        &self,
        dto: UpdateSearchRequestDto,
    ) -> Result<(), TrendingServiceError> {
        dto.validate()
            .map_err(|e| TrendingServiceError::Validation(e.to_string()))?;

        let movie_id = dto.movie.id.to_string();
        let poster_url = dto.movie.poster_url.unwrap_or_default();

        self.repo
            .upsert(&dto.search_term, &movie_id, &poster_url)
            .await?;

        counter!("searches_recorded_total").increment(1);
        debug!("Recorded search for term '{}'", dto.search_term);
        Ok(())
    }

    /// 查询热搜榜
    ///
    /// 按累计搜索次数降序返回记录，未指定limit时使用配置的默认值，
    /// 超过配置上限的limit会被截断。
    pub async fn trending(
        &self,
        query: TrendingQueryDto,
    ) -> Result<Vec<TrendingEntryDto>, TrendingServiceError> {
        query
            .validate()
            .map_err(|e| TrendingServiceError::Validation(e.to_string()))?;

        let limit = query
            .limit
            .unwrap_or(self.settings.trending.default_limit)
            .min(self.settings.trending.max_limit);

        let records = self.repo.top_by_count(limit).await?;
        Ok(records.into_iter().map(TrendingEntryDto::from).collect())
    }
}
