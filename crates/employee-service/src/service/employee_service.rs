//! 员工记录服务
//!
//! 五个操作直接映射到仓储调用：
//!
//! - 查询不存在的 ID 返回 `None`，不是错误
//! - 更新不存在的 ID 会以路径中的 ID 新建记录（upsert）
//! - 删除不检查记录是否存在

use std::sync::Arc;

use employee_shared::observability::metrics::record_employee_operation;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::Employee;
use crate::repository::EmployeeRepositoryTrait;

/// 删除成功后返回给调用方的提示信息
pub fn deletion_message(id: i64) -> String {
    format!("User with ID {} deleted successfully!", id)
}

/// 员工记录服务
///
/// 通过构造函数注入仓储，`R` 可以是具体类型，也可以是 `dyn EmployeeRepositoryTrait`
pub struct EmployeeService<R: EmployeeRepositoryTrait + ?Sized> {
    repo: Arc<R>,
}

impl<R: EmployeeRepositoryTrait + ?Sized> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 获取底层仓储（就绪探针使用）
    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// 列出所有员工
    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        let result = self.repo.find_all().await;
        track("list", &result);

        let employees = result?;
        debug!(count = employees.len(), "Employees listed");
        Ok(employees)
    }

    /// 按 ID 查询员工，不存在时返回 `None`
    pub async fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
        let result = self.repo.find_by_id(id).await;
        track("get", &result);

        let employee = result?;
        debug!(employee_id = id, found = employee.is_some(), "Employee looked up");
        Ok(employee)
    }

    /// 创建员工
    ///
    /// 请求体未携带 ID 时由存储分配
    pub async fn create_employee(&self, employee: Employee) -> Result<Employee> {
        let result = self.repo.save(employee).await;
        track("create", &result);

        let saved = result?;
        info!(employee_id = ?saved.id, "Employee created");
        Ok(saved)
    }

    /// 更新员工
    ///
    /// 记录存在时覆盖 name/email/salary 并保留原 ID；
    /// 不存在时忽略请求体中的 ID，以路径 ID 新建记录。
    pub async fn update_employee(&self, id: i64, payload: Employee) -> Result<Employee> {
        let result = self.upsert(id, payload).await;
        track("update", &result);
        result
    }

    async fn upsert(&self, id: i64, payload: Employee) -> Result<Employee> {
        match self.repo.find_by_id(id).await? {
            Some(mut existing) => {
                existing.overwrite_fields(payload);
                let saved = self.repo.save(existing).await?;
                info!(employee_id = id, "Employee updated");
                Ok(saved)
            }
            None => {
                let saved = self.repo.save(payload.with_id(id)).await?;
                info!(employee_id = id, "Employee created by update");
                Ok(saved)
            }
        }
    }

    /// 删除员工并返回提示信息，ID 不存在时同样返回成功
    pub async fn delete_employee(&self, id: i64) -> Result<String> {
        let result = self.repo.delete_by_id(id).await;
        track("delete", &result);

        result?;
        info!(employee_id = id, "Employee deleted");
        Ok(deletion_message(id))
    }
}

fn track<T>(operation: &'static str, result: &Result<T>) {
    let outcome = if result.is_ok() { "ok" } else { "error" };
    record_employee_operation(operation, outcome);
}
