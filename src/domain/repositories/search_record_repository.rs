// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_record::SearchRecord;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 搜索记录仓库特质
///
/// 定义搜索记录数据访问接口
#[async_trait]
pub trait SearchRecordRepository: Send + Sync {
    /// 根据搜索词精确查找记录
    async fn find_by_term(&self, term: &str) -> Result<Option<SearchRecord>, RepositoryError>;
    /// 插入新记录，计数从1开始；搜索词已存在时返回数据库错误
    async fn insert(
        &self,
        term: &str,
        movie_id: &str,
        poster_url: &str,
    ) -> Result<i32, RepositoryError>;
    /// 原子地将已有记录的计数加1；搜索词不存在时返回NotFound
    async fn increment_count(&self, term: &str) -> Result<(), RepositoryError>;
    /// 单条语句内完成"插入或计数加1"，并发的同词请求恰好计数一次
    async fn upsert(
        &self,
        term: &str,
        movie_id: &str,
        poster_url: &str,
    ) -> Result<(), RepositoryError>;
    /// 按计数降序返回最多limit条记录，计数相同时按插入顺序排列
    async fn top_by_count(&self, limit: u64) -> Result<Vec<SearchRecord>, RepositoryError>;
}
