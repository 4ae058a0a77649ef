//! 数据模型
//!
//! 员工记录服务唯一的实体定义

mod employee;

pub use employee::Employee;
