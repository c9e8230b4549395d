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

use axum::Extension;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use trendrs::config::settings::Settings;
use trendrs::infrastructure::database::connection;
use trendrs::infrastructure::repositories::search_record_repo_impl::SearchRecordRepositoryImpl;
use trendrs::presentation::routes;
use trendrs::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting trendrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // Initialize Prometheus Metrics
    trendrs::infrastructure::metrics::init_metrics(&settings.metrics.addr);

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize Components
    let search_repo = Arc::new(SearchRecordRepositoryImpl::new(db.clone()));

    // 5. Start HTTP server
    // CORS is wide open: the movie lookup client calls from the browser
    let app = routes::routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(Extension(search_repo))
        .layer(Extension(settings.clone()));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
