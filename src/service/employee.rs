//! Employee management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;
use crate::store::EmployeeDirectory;

/// Create, read, update and delete employees.
#[derive(Clone)]
pub struct EmployeeService {
    directory: Arc<dyn EmployeeDirectory>,
}

impl EmployeeService {
    /// Creates a service over `directory`.
    pub fn new(directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { directory }
    }

    /// Registers a new employee under a freshly generated id.
    pub async fn create(&self, name: &str, email: &str) -> EngineResult<Employee> {
        let (name, email) = (name.trim(), email.trim());
        Employee::validate_fields(name, email)?;

        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
        };
        let saved = self.directory.save(employee).await?;
        info!(employee_id = %saved.id, "Employee created");
        Ok(saved)
    }

    /// Looks up an employee, failing with `EmployeeNotFound` if absent.
    pub async fn get(&self, id: &str) -> EngineResult<Employee> {
        self.directory
            .find(id)
            .await?
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Replaces the name and email of an existing employee.
    pub async fn update(&self, id: &str, name: &str, email: &str) -> EngineResult<Employee> {
        let (name, email) = (name.trim(), email.trim());
        Employee::validate_fields(name, email)?;

        let mut employee = self.get(id).await?;
        employee.name = name.to_string();
        employee.email = email.to_string();

        let saved = self.directory.save(employee).await?;
        info!(employee_id = %saved.id, "Employee updated");
        Ok(saved)
    }

    /// Removes an employee. Their badge events are kept.
    pub async fn delete(&self, id: &str) -> EngineResult<()> {
        if !self.directory.delete(id).await? {
            return Err(EngineError::EmployeeNotFound { id: id.to_string() });
        }
        info!(employee_id = %id, "Employee deleted");
        Ok(())
    }

    /// Lists every employee.
    pub async fn list(&self) -> EngineResult<Vec<Employee>> {
        self.directory.list().await
    }
}
