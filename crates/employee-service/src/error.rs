//! 员工服务错误类型定义
//!
//! 记录不存在不属于错误（查询返回 `None`，删除为幂等操作），
//! 这里只覆盖存储层故障。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use employee_shared::error::SharedError;
use serde_json::json;

/// 员工服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum EmployeeError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("内部错误: {0}")]
    Internal(String),
}

impl EmployeeError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 详细信息仅记录日志，防止泄露连接串、SQL 等内部细节
        match &self {
            Self::Database(e) => tracing::error!(error = %e, "数据库操作失败"),
            Self::Internal(e) => tracing::error!(error = %e, "内部错误"),
        }

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": "服务内部错误，请稍后重试",
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从基础设施错误转换
impl From<SharedError> for EmployeeError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::Database(e) => Self::Database(e),
            other => Self::Internal(other.to_string()),
        }
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, EmployeeError>;
