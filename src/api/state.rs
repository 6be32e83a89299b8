//! Application state for the attendance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::service::{BadgeService, EmployeeService};
use crate::store::{EmployeeDirectory, EventStore, InMemoryEmployeeDirectory, InMemoryEventStore};

/// Shared application state.
///
/// Holds the services every handler works through. Cloning is cheap: the
/// services only hold `Arc`s to the stores.
#[derive(Clone)]
pub struct AppState {
    employees: EmployeeService,
    badges: BadgeService,
}

impl AppState {
    /// Creates application state over the given stores.
    pub fn new(
        config: &ConfigLoader,
        directory: Arc<dyn EmployeeDirectory>,
        events: Arc<dyn EventStore>,
    ) -> Self {
        Self {
            employees: EmployeeService::new(directory.clone()),
            badges: BadgeService::new(directory, events, *config.work_policy()),
        }
    }

    /// Creates application state backed by fresh in-memory stores.
    pub fn in_memory(config: &ConfigLoader) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryEmployeeDirectory::new()),
            Arc::new(InMemoryEventStore::new()),
        )
    }

    /// Returns the employee service.
    pub fn employees(&self) -> &EmployeeService {
        &self.employees
    }

    /// Returns the badge service.
    pub fn badges(&self) -> &BadgeService {
        &self.badges
    }
}
