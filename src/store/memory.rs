//! In-memory store implementations.
//!
//! Backed by `tokio::sync::RwLock` so concurrent requests only contend on
//! writes. Every read clones out a snapshot.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{BadgeEvent, Employee, NewBadgeEvent};

use super::{EmployeeDirectory, EventStore};

/// Employee directory held in a hash map.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeDirectory {
    employees: RwLock<HashMap<String, Employee>>,
}

impl InMemoryEmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn find(&self, id: &str) -> EngineResult<Option<Employee>> {
        Ok(self.employees.read().await.get(id).cloned())
    }

    async fn save(&self, employee: Employee) -> EngineResult<Employee> {
        self.employees
            .write()
            .await
            .insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    async fn delete(&self, id: &str) -> EngineResult<bool> {
        Ok(self.employees.write().await.remove(id).is_some())
    }

    async fn list(&self) -> EngineResult<Vec<Employee>> {
        let mut employees: Vec<Employee> = self.employees.read().await.values().cloned().collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(employees)
    }
}

/// Event store holding every badge event in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<BadgeEvent>>,
}

impl InMemoryEventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn events_in_range(
        &self,
        employee_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> EngineResult<Vec<BadgeEvent>> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .filter(|event| {
                event.employee_id == employee_id && start <= event.timestamp && event.timestamp < end
            })
            .cloned()
            .collect())
    }

    async fn append(&self, event: NewBadgeEvent) -> EngineResult<BadgeEvent> {
        let stored = event.with_id(Uuid::new_v4());
        debug!(
            employee_id = %stored.employee_id,
            event_id = %stored.id,
            badge_type = %stored.badge_type,
            "Badge event stored"
        );
        self.events.write().await.push(stored.clone());
        Ok(stored)
    }
}
