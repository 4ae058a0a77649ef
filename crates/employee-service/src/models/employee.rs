//! 员工实体

use serde::{Deserialize, Serialize};

/// 员工记录
///
/// `id` 由存储层在首次保存时分配；请求体中可以省略。
/// `name`、`email`、`salary` 对应可空列，缺失字段反序列化为 `None`，
/// 序列化时输出 `null`。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
}

impl Employee {
    /// 创建尚未分配 ID 的员工记录
    pub fn new(name: impl Into<String>, email: impl Into<String>, salary: f64) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
            salary: Some(salary),
        }
    }

    /// 返回设置了指定 ID 的副本
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// 用另一条记录覆盖可变字段（name/email/salary），保留自身 ID
    ///
    /// 覆盖是逐字段原样替换，`None` 也会覆盖已有值。
    pub fn overwrite_fields(&mut self, other: Employee) {
        self.name = other.name;
        self.email = other.email;
        self.salary = other.salary;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_without_id() {
        let employee: Employee =
            serde_json::from_value(json!({"name": "Alice", "email": "a@x.com", "salary": 5000}))
                .unwrap();
        assert_eq!(employee.id, None);
        assert_eq!(employee.name.as_deref(), Some("Alice"));
        assert_eq!(employee.salary, Some(5000.0));
    }

    #[test]
    fn test_deserialize_partial_payload() {
        // 前端只提交 name 和 email
        let employee: Employee =
            serde_json::from_value(json!({"name": "Bob", "email": "b@x.com"})).unwrap();
        assert_eq!(employee.salary, None);
    }

    #[test]
    fn test_serialize_missing_fields_as_null() {
        let value = serde_json::to_value(Employee::default().with_id(7)).unwrap();
        assert_eq!(
            value,
            json!({"id": 7, "name": null, "email": null, "salary": null})
        );
    }

    #[test]
    fn test_overwrite_fields_keeps_id() {
        let mut current = Employee::new("Alice", "a@x.com", 5000.0).with_id(1);
        current.overwrite_fields(Employee {
            id: Some(99),
            name: Some("Alicia".into()),
            email: None,
            salary: Some(5500.0),
        });

        assert_eq!(current.id, Some(1));
        assert_eq!(current.name.as_deref(), Some("Alicia"));
        assert_eq!(current.email, None);
        assert_eq!(current.salary, Some(5500.0));
    }
}
