use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use sysinfo::System;
use tracing::info;

use crate::{
    application::services::ObjectStore,
    domain::upload::{formats::allowed_mime_types, MAX_FILE_SIZE, MIN_FILE_SIZE},
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
    #[serde(rename = "uploadLimits")]
    pub upload_limits: UploadLimits,
    pub metrics: SystemMetrics,
}

#[derive(Debug, Serialize)]
pub struct UploadLimits {
    #[serde(rename = "minSize")]
    pub min_size: u64,
    #[serde(rename = "maxSize")]
    pub max_size: u64,
    #[serde(rename = "allowedMimeTypes")]
    pub allowed_mime_types: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    #[serde(rename = "cpuUsagePercent")]
    pub cpu_usage_percent: f32,
    #[serde(rename = "memoryUsedBytes")]
    pub memory_used_bytes: u64,
    #[serde(rename = "memoryTotalBytes")]
    pub memory_total_bytes: u64,
    #[serde(rename = "memoryUsagePercent")]
    pub memory_usage_percent: f32,
}

pub struct HealthController;

impl HealthController {
    /// GET /api/health
    pub async fn health_check(
        State(object_store): State<Arc<dyn ObjectStore>>,
    ) -> Json<HealthResponse> {
        info!("Health check requested");

        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let memory_used = sys.used_memory();
        let memory_total = sys.total_memory();
        let memory_usage_percent = if memory_total > 0 {
            (memory_used as f32 / memory_total as f32) * 100.0
        } else {
            0.0
        };

        Json(HealthResponse {
            status: "healthy".to_string(),
            provider: object_store.provider().as_str().to_string(),
            upload_limits: UploadLimits {
                min_size: MIN_FILE_SIZE,
                max_size: MAX_FILE_SIZE,
                allowed_mime_types: allowed_mime_types().map(String::from).collect(),
            },
            metrics: SystemMetrics {
                cpu_usage_percent: sys.global_cpu_usage(),
                memory_used_bytes: memory_used,
                memory_total_bytes: memory_total,
                memory_usage_percent,
            },
        })
    }
}
