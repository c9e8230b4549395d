// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 搜索记录实体
///
/// 表示一个搜索词的累计热度信息，搜索词本身是业务主键，
/// 每次重复搜索只增加计数，不产生新记录。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// 记录唯一标识符，首次插入时由数据库单调分配，永不复用
    pub id: i32,
    /// 搜索词，区分大小写，在所有记录中唯一
    pub term: String,
    /// 累计搜索次数，首次记录为1，此后每次重复搜索加1
    pub count: i64,
    /// 关联的电影ID（首次搜索时写入，重复搜索不再更新）
    pub movie_id: String,
    /// 海报引用地址，可能为空字符串
    pub poster_url: String,
}
