//! 员工记录存储层
//!
//! 提供员工实体的数据访问接口，封装存储细节。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据持久化，不包含业务逻辑
//! - PostgreSQL 实现使用 SQLx，每次保存是一个独立的事务
//! - 内存实现使用 DashMap，用于本地开发和测试
//! - 定义 trait 接口以支持 mock 测试

mod employee_repo;
mod memory_repo;
mod traits;

pub use employee_repo::EmployeeRepository;
pub use memory_repo::InMemoryEmployeeRepository;
pub use traits::*;
