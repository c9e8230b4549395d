// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;
use trendrs::infrastructure::database::entities::search;

/// 测试首次搜索创建记录
///
/// 验证一个从未出现过的搜索词会创建恰好一条计数为1的记录。
#[tokio::test]
async fn test_update_search_creates_record() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/update_search")
        .json(&json!({
            "searchTerm": "batman",
            "movie": {
                "id": "1",
                "poster_url": "https://image.tmdb.org/t/p/w200/batman.jpg"
            }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);

    // Verify the record was created in the database
    let record = search::Entity::find()
        .filter(search::Column::Term.eq("batman"))
        .one(app.db.as_ref())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.count, 1);
    assert_eq!(record.movie_id, "1");
    assert_eq!(
        record.poster_url,
        "https://image.tmdb.org/t/p/w200/batman.jpg"
    );
}

/// 测试重复搜索只增加计数
///
/// 验证同一搜索词重复出现时不产生新记录，计数加1，
/// 并且热搜榜按计数降序返回。
#[tokio::test]
async fn test_update_search_increments_and_trending_orders() {
    let app = create_test_app().await;

    for _ in 0..2 {
        let response = app
            .server
            .post("/update_search")
            .json(&json!({ "searchTerm": "batman", "movie": { "id": "1" } }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let response = app
        .server
        .post("/update_search")
        .json(&json!({ "searchTerm": "avengers", "movie": { "id": "2" } }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.server.get("/trending").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["term"], "batman");
    assert_eq!(body[0]["count"], 2);
    assert_eq!(body[1]["term"], "avengers");
    assert_eq!(body[1]["count"], 1);

    // Still exactly one record per term
    let total = search::Entity::find().count(app.db.as_ref()).await.unwrap();
    assert_eq!(total, 2);
}

/// 测试缺少searchTerm的请求被拒绝
///
/// 验证请求体缺少必填字段时返回客户端错误，且不触及存储。
#[tokio::test]
async fn test_update_search_missing_term_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/update_search")
        .json(&json!({ "movie": { "id": "1" } }))
        .await;

    assert!(response.status_code().is_client_error());

    let total = search::Entity::find().count(app.db.as_ref()).await.unwrap();
    assert_eq!(total, 0);
}

/// 测试空searchTerm被拒绝
#[tokio::test]
async fn test_update_search_empty_term_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/update_search")
        .json(&json!({ "searchTerm": "", "movie": { "id": "1" } }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let total = search::Entity::find().count(app.db.as_ref()).await.unwrap();
    assert_eq!(total, 0);
}

/// 测试缺少movie.id的请求被拒绝
#[tokio::test]
async fn test_update_search_missing_movie_id_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/update_search")
        .json(&json!({ "searchTerm": "batman", "movie": {} }))
        .await;

    assert!(response.status_code().is_client_error());

    let total = search::Entity::find().count(app.db.as_ref()).await.unwrap();
    assert_eq!(total, 0);
}

/// 测试poster_path别名
///
/// 验证发送poster_path的客户端变体会落到规范的poster_url字段。
#[tokio::test]
async fn test_update_search_accepts_poster_path_alias() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/update_search")
        .json(&json!({
            "searchTerm": "dune",
            "movie": { "id": "3", "poster_path": "/dune.jpg" }
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let record = search::Entity::find()
        .filter(search::Column::Term.eq("dune"))
        .one(app.db.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.poster_url, "/dune.jpg");
}

/// 测试数字形式的movie.id
///
/// 验证数字ID被字符串化存储，缺少海报字段时存为空字符串。
#[tokio::test]
async fn test_update_search_numeric_movie_id() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/update_search")
        .json(&json!({ "searchTerm": "alien", "movie": { "id": 42 } }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let record = search::Entity::find()
        .filter(search::Column::Term.eq("alien"))
        .one(app.db.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.movie_id, "42");
    assert_eq!(record.poster_url, "");
}

/// 测试空库的热搜榜
///
/// 验证没有任何记录时返回空数组而不是错误。
#[tokio::test]
async fn test_trending_empty_returns_empty_array() {
    let app = create_test_app().await;

    let response = app.server.get("/trending").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Vec<serde_json::Value> = response.json();
    assert!(body.is_empty());
}

/// 测试热搜榜默认条数上限
///
/// 验证记录超过默认条数时只返回前5条，且为计数最高的5条。
#[tokio::test]
async fn test_trending_caps_at_default_limit() {
    let app = create_test_app().await;

    let terms = [
        "batman", "avengers", "dune", "alien", "matrix", "inception", "up",
    ];
    for (i, term) in terms.iter().enumerate() {
        // Give each term a distinct count: term i is searched i+1 times
        for _ in 0..=i {
            app.server
                .post("/update_search")
                .json(&json!({ "searchTerm": term, "movie": { "id": format!("{}", i) } }))
                .await;
        }
    }

    let response = app.server.get("/trending").await;
    let body: Vec<serde_json::Value> = response.json();

    assert_eq!(body.len(), 5);
    assert_eq!(body[0]["term"], "up");
    assert_eq!(body[0]["count"], 7);
    assert_eq!(body[4]["term"], "dune");
    assert_eq!(body[4]["count"], 3);
}

/// 测试limit查询参数
#[tokio::test]
async fn test_trending_respects_limit_param() {
    let app = create_test_app().await;

    for term in ["batman", "avengers", "dune"] {
        app.server
            .post("/update_search")
            .json(&json!({ "searchTerm": term, "movie": { "id": "1" } }))
            .await;
    }

    let response = app
        .server
        .get("/trending")
        .add_query_param("limit", 2)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 2);
}

/// 测试非法limit被拒绝
#[tokio::test]
async fn test_trending_zero_limit_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/trending")
        .add_query_param("limit", 0)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

/// 测试健康检查端点
#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
}
