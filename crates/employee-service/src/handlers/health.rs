//! 健康检查处理器

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{SERVICE_NAME, state::AppState};

/// 存活探针：服务进程正常即返回 ok
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

/// 就绪探针：检查存储是否可用
///
/// 就绪探针失败时编排系统会把实例从负载均衡中摘除。
pub async fn readiness_check(State(state): State<AppState>) -> Json<Value> {
    let store_ok = state.employees.repository().health_check().await.is_ok();

    Json(json!({
        "status": if store_ok { "ok" } else { "degraded" },
        "service": SERVICE_NAME,
        "checks": {
            "store": if store_ok { "ok" } else { "fail" }
        }
    }))
}
