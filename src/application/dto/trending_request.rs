// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_record::SearchRecord;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct TrendingQueryDto {
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct TrendingEntryDto {
    pub id: i32,
    pub term: String,
    pub count: i64,
    pub movie_id: String,
    pub poster_url: String,
}

impl From<SearchRecord> for TrendingEntryDto {
    fn from(record: SearchRecord) -> Self {
        Self {
            id: record.id,
            term: record.term,
            count: record.count,
            movie_id: record.movie_id,
            poster_url: record.poster_url,
        }
    }
}
