//! 服务层
//!
//! 处理器只负责提取请求参数，具体操作委托给服务层

mod employee_service;

pub use employee_service::{EmployeeService, deletion_message};
