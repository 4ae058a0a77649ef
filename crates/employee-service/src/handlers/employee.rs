//! 员工记录 API 处理器
//!
//! 响应体直接是员工 JSON（或 `null`、纯文本），不包装统一响应结构，
//! 与现有前端的约定保持一致。

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{error::EmployeeError, models::Employee, state::AppState};

/// 获取全部员工
///
/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, EmployeeError> {
    let employees = state.employees.list_employees().await?;
    Ok(Json(employees))
}

/// 获取员工详情
///
/// GET /api/employees/{id}
///
/// 记录不存在时返回 200 和 `null`，不返回 404
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Employee>>, EmployeeError> {
    let employee = state.employees.get_employee(id).await?;
    Ok(Json(employee))
}

/// 创建员工
///
/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<Json<Employee>, EmployeeError> {
    let created = state.employees.create_employee(employee).await?;
    Ok(Json(created))
}

/// 更新员工
///
/// PUT /api/employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Employee>,
) -> Result<Json<Employee>, EmployeeError> {
    let updated = state.employees.update_employee(id, payload).await?;
    Ok(Json(updated))
}

/// 删除员工
///
/// DELETE /api/employees/{id}
///
/// 返回 text/plain 提示信息
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<String, EmployeeError> {
    state.employees.delete_employee(id).await
}
