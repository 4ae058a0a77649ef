//! 路由配置模块
//!
//! 定义 REST API 端点的路由映射和中间件栈

use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{MethodRouter, get},
};
use employee_shared::{config::CorsConfig, observability::middleware as obs_middleware};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::{handlers, state::AppState};

/// 员工接口路径前缀
pub const EMPLOYEES_PATH: &str = "/api/employees";

/// 构建员工记录路由
///
/// 集合路径同时接受带和不带末尾斜杠的形式
pub fn employee_routes() -> Router<AppState> {
    let collection: MethodRouter<AppState> = get(handlers::employee::list_employees)
        .post(handlers::employee::create_employee);

    Router::new()
        .route(EMPLOYEES_PATH, collection.clone())
        .route(&format!("{EMPLOYEES_PATH}/"), collection)
        .route(
            &format!("{EMPLOYEES_PATH}/{{id}}"),
            get(handlers::employee::get_employee)
                .put(handlers::employee::update_employee)
                .delete(handlers::employee::delete_employee),
        )
}

/// 构建运维探针路由
pub fn probe_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
}

/// 根据配置构建 CORS 层
///
/// `*` 表示允许任意来源；无法解析的来源会被跳过并记录警告
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allowed_origins.iter().any(|o| o == "*") {
        info!("CORS allowed_origins: * (all origins)");
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    info!(allowed_origins = ?config.allowed_origins, "CORS configured");
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// 组装完整应用：业务路由 + 探针 + 中间件
pub fn app(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .merge(employee_routes())
        .merge(probe_routes())
        .layer(cors_layer(cors))
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}
