//! 内存员工仓储
//!
//! 使用 DashMap 实现的并发安全内存存储，适用于本地开发和测试环境。

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use super::traits::EmployeeRepositoryTrait;
use crate::error::{EmployeeError, Result};
use crate::models::Employee;

/// 内存员工仓储
///
/// ID 从 1 开始自增；带显式 ID 的保存会把计数器推进到该 ID，
/// 保证后续分配的 ID 不会与之冲突。ID 用尽后新建返回错误，不会回绕。
#[derive(Debug)]
pub struct InMemoryEmployeeRepository {
    records: DashMap<i64, Employee>,
    /// 已分配过的最大 ID
    last_id: AtomicI64,
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            last_id: AtomicI64::new(0),
        }
    }

    fn assign_id(&self, requested: Option<i64>) -> Result<i64> {
        match requested {
            Some(id) => {
                self.last_id.fetch_max(id, Ordering::SeqCst);
                Ok(id)
            }
            None => self
                .last_id
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
                .map(|last| last + 1)
                .map_err(|last| {
                    EmployeeError::Internal(format!("employee id space exhausted at {last}"))
                }),
        }
    }
}

#[async_trait]
impl EmployeeRepositoryTrait for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        // DashMap 迭代顺序不确定，按 ID 排序与 PostgreSQL 实现保持一致
        let mut employees: Vec<Employee> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        employees.sort_by_key(|e| e.id);
        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee> {
        let id = self.assign_id(employee.id)?;
        employee.id = Some(id);
        self.records.insert(id, employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.records.remove(&id);
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryEmployeeRepository::new();

        let first = repo.save(Employee::new("Alice", "a@x.com", 5000.0)).await.unwrap();
        let second = repo.save(Employee::new("Bob", "b@x.com", 4000.0)).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_save_with_explicit_id_overwrites() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save(Employee::new("Alice", "a@x.com", 5000.0)).await.unwrap();

        let updated = repo
            .save(Employee::new("Alicia", "a@x.com", 5500.0).with_id(1))
            .await
            .unwrap();

        assert_eq!(updated.id, Some(1));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("Alicia"));
    }

    #[tokio::test]
    async fn test_explicit_id_advances_counter() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save(Employee::new("Zed", "z@x.com", 1.0).with_id(42)).await.unwrap();

        let next = repo.save(Employee::new("Amy", "amy@x.com", 2.0)).await.unwrap();
        assert_eq!(next.id, Some(43));
    }

    #[tokio::test]
    async fn test_max_explicit_id_exhausts_generated_ids() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save(Employee::new("Max", "m@x.com", 1.0).with_id(i64::MAX))
            .await
            .unwrap();

        let result = repo.save(Employee::new("New", "n@x.com", 2.0)).await;
        assert!(matches!(result, Err(EmployeeError::Internal(_))));

        // 已有记录不被覆盖，也不会产生负数 ID
        let stored = repo.find_by_id(i64::MAX).await.unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("Max"));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_negative_explicit_id_does_not_rewind_counter() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save(Employee::new("A", "a@x.com", 1.0)).await.unwrap();
        repo.save(Employee::new("Neg", "n@x.com", 1.0).with_id(-5))
            .await
            .unwrap();

        let next = repo.save(Employee::new("B", "b@x.com", 1.0)).await.unwrap();
        assert_eq!(next.id, Some(2));
    }

    #[tokio::test]
    async fn test_find_all_is_sorted_by_id() {
        let repo = InMemoryEmployeeRepository::new();
        for id in [5, 3, 9, 1] {
            repo.save(Employee::default().with_id(id)).await.unwrap();
        }

        let ids: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 5, 9]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save(Employee::new("Alice", "a@x.com", 5000.0)).await.unwrap();

        repo.delete_by_id(999).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);

        repo.delete_by_id(1).await.unwrap();
        assert!(repo.find_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_saves_get_unique_ids() {
        let repo = std::sync::Arc::new(InMemoryEmployeeRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.save(Employee::new(format!("e{i}"), "e@x.com", 1.0))
                        .await
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let ids: std::collections::HashSet<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|e| e.id)
            .collect();
        assert_eq!(ids.len(), 50);
    }
}
