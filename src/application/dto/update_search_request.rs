// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UpdateSearchRequestDto {
    #[serde(rename = "searchTerm")]
    #[validate(length(min = 1, message = "searchTerm cannot be empty"))]
    pub search_term: String,
    #[validate(nested)]
    pub movie: MovieDto,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct MovieDto {
    pub id: MovieId,
    // Clients disagree on the poster field name; poster_url is canonical,
    // poster_path is accepted as an alias of the same field
    #[serde(default, alias = "poster_path")]
    pub poster_url: Option<String>,
}

/// 电影ID
///
/// 客户端既可能发送字符串也可能发送数字，存储时统一转为字符串
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MovieId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MovieId::Number(n) => write!(f, "{}", n),
            MovieId::Text(s) => write!(f, "{}", s),
        }
    }
}
