use std::sync::Arc;

use axum::{Json, extract::State};
use roster::data::{HealthResponse, HealthStatus, ServiceInfo, UptimeInfo};
use roster::log;

fn human_readable_uptime(uptime: chrono::TimeDelta) -> String {
    let uptime_seconds = uptime.num_seconds();
    let days = uptime.num_days();
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn service_uptime(started_at: chrono::DateTime<chrono::Utc>) -> UptimeInfo {
    let uptime = chrono::Utc::now().signed_duration_since(started_at);
    UptimeInfo {
        seconds: uptime.num_seconds(),
        human: human_readable_uptime(uptime),
    }
}

pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<HealthResponse> {
    let (status, directory, activities, participants) = match state.activities.list().await {
        Ok(activities) => {
            let participants: usize = activities.values().map(|a| a.participants.len()).sum();
            (HealthStatus::Healthy, "up", activities.len(), participants)
        }
        Err(err) => {
            log::warn!("Health check could not read the directory: {err}");
            (HealthStatus::Degraded, "down", 0, 0)
        }
    };

    let health_response = HealthResponse {
        status,
        timestamp: chrono::Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: service_uptime(state.started_at),
        services: ServiceInfo {
            directory: directory.to_string(),
            activities,
            participants,
        },
    };

    log::debug!("Health check: {:?}", health_response);

    Json(health_response)
}
