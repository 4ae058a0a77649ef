//! 员工记录服务
//!
//! 提供员工记录的 CRUD REST API，挂载在 `/api/employees` 下。
//!
//! ## 模块结构
//!
//! - `models`: 员工实体
//! - `repository`: 存储接口及 PostgreSQL / 内存实现
//! - `service`: 员工记录服务
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由与中间件配置
//! - `state`: 应用状态
//! - `error`: 错误类型定义
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据库：SQLx (PostgreSQL)
//! - 内存存储：DashMap

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

/// 服务名称，用于加载配置和探针响应
pub const SERVICE_NAME: &str = "employee-service";

pub use error::{EmployeeError, Result};
pub use models::Employee;
pub use repository::{EmployeeRepository, EmployeeRepositoryTrait, InMemoryEmployeeRepository};
pub use service::EmployeeService;
pub use state::AppState;
