//! Storage collaborators.
//!
//! The engine reads employees and badge events through these traits and
//! never depends on a particular database. Implementations return owned
//! snapshots, so a report can be built from them without holding a lock.

mod memory;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::error::EngineResult;
use crate::models::{BadgeEvent, Employee, NewBadgeEvent};

pub use memory::{InMemoryEmployeeDirectory, InMemoryEventStore};

/// Lookup and maintenance of employees.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Returns the employee with `id`, if any.
    async fn find(&self, id: &str) -> EngineResult<Option<Employee>>;

    /// Returns true if an employee with `id` exists.
    async fn exists(&self, id: &str) -> EngineResult<bool> {
        Ok(self.find(id).await?.is_some())
    }

    /// Inserts or replaces an employee, keyed by its id.
    async fn save(&self, employee: Employee) -> EngineResult<Employee>;

    /// Removes the employee with `id`. Returns false if there was none.
    async fn delete(&self, id: &str) -> EngineResult<bool>;

    /// Returns every employee.
    async fn list(&self) -> EngineResult<Vec<Employee>>;
}

/// Append-only log of badge events.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Returns the events of `employee_id` with `start <= timestamp < end`.
    ///
    /// No ordering is promised; the pairing engine sorts.
    async fn events_in_range(
        &self,
        employee_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> EngineResult<Vec<BadgeEvent>>;

    /// Stores a new event and returns it with its assigned id.
    async fn append(&self, event: NewBadgeEvent) -> EngineResult<BadgeEvent>;
}
