// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;

pub fn init_metrics(addr: &str) {
    let addr: SocketAddr = match addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!("Invalid metrics address {}: {}", addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    info!("Metrics exporter listening on {}", addr);
}
