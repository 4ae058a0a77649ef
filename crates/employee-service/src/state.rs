//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use crate::repository::EmployeeRepositoryTrait;
use crate::service::EmployeeService;

/// 以 trait 对象持有仓储的员工服务，运行时可在 PostgreSQL 与内存实现间切换
pub type DynEmployeeService = EmployeeService<dyn EmployeeRepositoryTrait>;

/// Axum 应用共享状态
///
/// 服务通过 Arc 在 handler 间共享
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<DynEmployeeService>,
}

impl AppState {
    /// 以给定仓储创建应用状态
    pub fn new(repo: Arc<dyn EmployeeRepositoryTrait>) -> Self {
        Self {
            employees: Arc::new(EmployeeService::new(repo)),
        }
    }
}
