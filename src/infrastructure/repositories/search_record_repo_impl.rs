// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::search_record::SearchRecord;
use crate::domain::repositories::search_record_repository::{
    RepositoryError, SearchRecordRepository,
};
use crate::infrastructure::database::entities::search as search_entity;
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::*;
use std::sync::Arc;

/// 搜索记录仓库实现
pub struct SearchRecordRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SearchRecordRepositoryImpl {
    /// 创建新的搜索记录仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<search_entity::Model> for SearchRecord {
    fn from(m: search_entity::Model) -> Self {
        SearchRecord {
            id: m.id,
            term: m.term,
            count: m.count,
            movie_id: m.movie_id,
            poster_url: m.poster_url,
        }
    }
}

#[async_trait]
impl SearchRecordRepository for SearchRecordRepositoryImpl {
    async fn find_by_term(&self, term: &str) -> Result<Option<SearchRecord>, RepositoryError> {
        let model = search_entity::Entity::find()
            .filter(search_entity::Column::Term.eq(term))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(SearchRecord::from))
    }

    async fn insert(
        &self,
        term: &str,
        movie_id: &str,
        poster_url: &str,
    ) -> Result<i32, RepositoryError> {
        let model = search_entity::ActiveModel {
            term: Set(term.to_string()),
            count: Set(1),
            movie_id: Set(movie_id.to_string()),
            poster_url: Set(poster_url.to_string()),
            ..Default::default()
        };

        let result = search_entity::Entity::insert(model)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.last_insert_id)
    }

    async fn increment_count(&self, term: &str) -> Result<(), RepositoryError> {
        let result = search_entity::Entity::update_many()
            .col_expr(
                search_entity::Column::Count,
                Expr::col(search_entity::Column::Count).add(1),
            )
            .filter(search_entity::Column::Term.eq(term))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn upsert(
        &self,
        term: &str,
        movie_id: &str,
        poster_url: &str,
    ) -> Result<(), RepositoryError> {
        let model = search_entity::ActiveModel {
            term: Set(term.to_string()),
            count: Set(1),
            movie_id: Set(movie_id.to_string()),
            poster_url: Set(poster_url.to_string()),
            ..Default::default()
        };

        // 单条语句完成插入或计数加1；重复搜索保留首次关联的电影信息
        search_entity::Entity::insert(model)
            .on_conflict(
                OnConflict::column(search_entity::Column::Term)
                    .value(
                        search_entity::Column::Count,
                        Expr::col(search_entity::Column::Count).add(1),
                    )
                    .to_owned(),
            )
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }

    async fn top_by_count(&self, limit: u64) -> Result<Vec<SearchRecord>, RepositoryError> {
        let models = search_entity::Entity::find()
            .order_by_desc(search_entity::Column::Count)
            .order_by_asc(search_entity::Column::Id)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(SearchRecord::from).collect())
    }
}
