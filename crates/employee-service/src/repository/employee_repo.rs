//! PostgreSQL 员工仓储

use async_trait::async_trait;
use employee_shared::database::Database;
use tracing::{debug, info};

use super::traits::EmployeeRepositoryTrait;
use crate::error::Result;
use crate::models::Employee;

/// PostgreSQL 员工仓储
pub struct EmployeeRepository {
    db: Database,
}

impl EmployeeRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 创建 employees 表（已存在则跳过）
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS employees (
                id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
                name TEXT,
                email TEXT,
                salary DOUBLE PRECISION
            )
            "#,
        )
        .execute(self.db.pool())
        .await?;

        info!("employees table ready");
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepositoryTrait for EmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, email, salary
            FROM employees
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, email, salary
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(employee)
    }

    async fn save(&self, employee: Employee) -> Result<Employee> {
        let Some(id) = employee.id else {
            let saved = sqlx::query_as::<_, Employee>(
                r#"
                INSERT INTO employees (name, email, salary)
                VALUES ($1, $2, $3)
                RETURNING id, name, email, salary
                "#,
            )
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(employee.salary)
            .fetch_one(self.db.pool())
            .await?;

            return Ok(saved);
        };

        let mut tx = self.db.pool().begin().await?;

        let saved = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (id, name, email, salary)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                salary = EXCLUDED.salary
            RETURNING id, name, email, salary
            "#,
        )
        .bind(id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(employee.salary)
        .fetch_one(&mut *tx)
        .await?;

        // 显式 ID 不经过序列，需要把序列推进到该 ID 之后，
        // 否则后续自动分配的 ID 会与之冲突。序列不会被回拨；
        // 目标值封顶在 BIGINT 上限，避免 $1 + 1 溢出导致整个事务回滚。
        sqlx::query(
            r#"
            SELECT setval(
                pg_get_serial_sequence('employees', 'id'),
                GREATEST(
                    nextval(pg_get_serial_sequence('employees', 'id')),
                    LEAST($1::BIGINT, 9223372036854775806) + 1
                ),
                false
            )
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(employee_id = id, "Employee upserted with explicit id");
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        debug!(employee_id = id, rows = result.rows_affected(), "Employee delete executed");
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        self.db.health_check().await?;
        Ok(())
    }
}
