//! 仓储 Trait 定义
//!
//! 服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Employee;

/// 员工记录仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepositoryTrait: Send + Sync {
    /// 按存储的自然顺序（ID 升序）返回全部记录
    async fn find_all(&self) -> Result<Vec<Employee>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>>;

    /// 保存记录：`id` 为空时分配新 ID，否则插入或覆盖该 ID 对应的记录
    async fn save(&self, employee: Employee) -> Result<Employee>;

    /// 删除记录，记录不存在时不做任何事
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// 存储可用性检查（就绪探针）
    async fn health_check(&self) -> Result<()>;
}
