//! Badge recording and time reports.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::info;

use crate::calculation::{ReportWindow, daily_report, monthly_report, parse_date};
use crate::config::WorkPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{BadgeEvent, BadgeType, NewBadgeEvent, TimeReport, YearMonth};
use crate::store::{EmployeeDirectory, EventStore};

/// Records badge events and builds time reports for known employees.
#[derive(Clone)]
pub struct BadgeService {
    directory: Arc<dyn EmployeeDirectory>,
    events: Arc<dyn EventStore>,
    policy: WorkPolicy,
}

impl BadgeService {
    /// Creates a service over the given stores and policy.
    pub fn new(
        directory: Arc<dyn EmployeeDirectory>,
        events: Arc<dyn EventStore>,
        policy: WorkPolicy,
    ) -> Self {
        Self {
            directory,
            events,
            policy,
        }
    }

    /// The policy reports are checked against.
    pub fn policy(&self) -> &WorkPolicy {
        &self.policy
    }

    /// Stores a badge event for an existing employee.
    pub async fn record_badge(
        &self,
        employee_id: &str,
        timestamp: NaiveDateTime,
        badge_type: BadgeType,
    ) -> EngineResult<BadgeEvent> {
        if employee_id.trim().is_empty() {
            return Err(EngineError::invalid_input(
                "employee_id",
                "employee id is required",
            ));
        }
        self.ensure_employee(employee_id).await?;

        let stored = self
            .events
            .append(NewBadgeEvent {
                employee_id: employee_id.to_string(),
                timestamp,
                badge_type,
            })
            .await?;

        info!(
            employee_id = %employee_id,
            event_id = %stored.id,
            badge_type = %badge_type,
            timestamp = %timestamp,
            "Badge recorded"
        );
        Ok(stored)
    }

    /// Builds the report for `date` (`yyyy-MM-dd`).
    pub async fn daily_report(&self, employee_id: &str, date: &str) -> EngineResult<TimeReport> {
        let date = parse_date(date)?;
        self.ensure_employee(employee_id).await?;

        let window = ReportWindow::for_day(date)?;
        let events = self.fetch(employee_id, window).await?;
        daily_report(employee_id, date, &events, &self.policy)
    }

    /// Builds the report for `month` (`yyyy-MM`).
    pub async fn monthly_report(&self, employee_id: &str, month: &str) -> EngineResult<TimeReport> {
        let year_month: YearMonth = month.parse()?;
        self.ensure_employee(employee_id).await?;

        let events = self
            .fetch(employee_id, ReportWindow::for_month(year_month))
            .await?;
        Ok(monthly_report(employee_id, year_month, &events, &self.policy))
    }

    async fn ensure_employee(&self, employee_id: &str) -> EngineResult<()> {
        if self.directory.exists(employee_id).await? {
            Ok(())
        } else {
            Err(EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })
        }
    }

    async fn fetch(
        &self,
        employee_id: &str,
        window: ReportWindow,
    ) -> EngineResult<Vec<BadgeEvent>> {
        self.events
            .events_in_range(employee_id, window.start, window.end)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, ReportScope};
    use crate::store::{InMemoryEmployeeDirectory, InMemoryEventStore};
    use async_trait::async_trait;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    async fn service_with_employee(id: &str) -> BadgeService {
        let directory = Arc::new(InMemoryEmployeeDirectory::new());
        directory
            .save(Employee {
                id: id.to_string(),
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
            })
            .await
            .unwrap();
        BadgeService::new(
            directory,
            Arc::new(InMemoryEventStore::new()),
            WorkPolicy::default(),
        )
    }

    async fn record(service: &BadgeService, time: &str, badge_type: BadgeType) {
        service
            .record_badge("emp_001", make_datetime(time), badge_type)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_record_badge_for_known_employee() {
        let service = service_with_employee("emp_001").await;
        let event = service
            .record_badge("emp_001", make_datetime("2025-03-03 09:00:00"), BadgeType::In)
            .await
            .unwrap();

        assert_eq!(event.employee_id, "emp_001");
        assert_eq!(event.timestamp, make_datetime("2025-03-03 09:00:00"));
        assert!(event.is_in());
    }

    #[tokio::test]
    async fn test_record_badge_unknown_employee() {
        let service = service_with_employee("emp_001").await;
        let result = service
            .record_badge("nonexistent", make_datetime("2025-03-03 09:00:00"), BadgeType::In)
            .await;

        match result {
            Err(EngineError::EmployeeNotFound { id }) => assert_eq!(id, "nonexistent"),
            other => panic!("Expected EmployeeNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_record_badge_blank_employee_id() {
        let service = service_with_employee("emp_001").await;
        let result = service
            .record_badge("  ", make_datetime("2025-03-03 09:00:00"), BadgeType::In)
            .await;
        assert!(matches!(result, Err(EngineError::InvalidInput { field, .. }) if field == "employee_id"));
    }

    #[tokio::test]
    async fn test_daily_report_from_recorded_badges() {
        let service = service_with_employee("emp_001").await;
        record(&service, "2025-03-03 16:00:00", BadgeType::Out).await;
        record(&service, "2025-03-03 09:00:00", BadgeType::In).await;
        record(&service, "2025-03-04 09:00:00", BadgeType::In).await;

        let report = service.daily_report("emp_001", "2025-03-03").await.unwrap();
        assert_eq!(report.total_minutes, 420);
        assert!(report.sufficient);
        assert_eq!(report.unpaired_events, 0);
    }

    #[tokio::test]
    async fn test_daily_report_unknown_employee_is_not_found() {
        let service = service_with_employee("emp_001").await;
        let result = service.daily_report("ghost", "2025-03-03").await;
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { .. })));
    }

    #[tokio::test]
    async fn test_daily_report_bad_date_is_invalid_input() {
        let service = service_with_employee("emp_001").await;
        let result = service.daily_report("emp_001", "03-03-2025").await;
        assert!(matches!(result, Err(EngineError::InvalidInput { field, .. }) if field == "date"));
    }

    #[tokio::test]
    async fn test_monthly_report_end_to_end() {
        let service = service_with_employee("emp_001").await;
        record(&service, "2025-03-03 09:00:00", BadgeType::In).await;
        record(&service, "2025-03-03 17:00:00", BadgeType::Out).await;
        record(&service, "2025-03-04 09:00:00", BadgeType::In).await;
        record(&service, "2025-03-04 16:00:00", BadgeType::Out).await;

        let report = service.monthly_report("emp_001", "2025-03").await.unwrap();
        assert_eq!(report.total_minutes, 900);
        assert_eq!(report.expected_minutes, 8820);
        assert!(!report.sufficient);
        assert_eq!(
            report.scope,
            ReportScope::Month(YearMonth::new(2025, 3).unwrap())
        );
    }

    #[tokio::test]
    async fn test_monthly_report_bad_month_is_invalid_input() {
        let service = service_with_employee("emp_001").await;
        let result = service.monthly_report("emp_001", "March").await;
        assert!(matches!(result, Err(EngineError::InvalidInput { field, .. }) if field == "month"));
    }

    struct FailingStore;

    #[async_trait]
    impl EventStore for FailingStore {
        async fn events_in_range(
            &self,
            _employee_id: &str,
            _start: NaiveDateTime,
            _end: NaiveDateTime,
        ) -> EngineResult<Vec<BadgeEvent>> {
            Err(EngineError::Storage {
                message: "store offline".to_string(),
            })
        }

        async fn append(&self, _event: NewBadgeEvent) -> EngineResult<BadgeEvent> {
            Err(EngineError::Storage {
                message: "store offline".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_store_failure_propagates_unchanged() {
        let directory = Arc::new(InMemoryEmployeeDirectory::new());
        directory
            .save(Employee {
                id: "emp_001".to_string(),
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
            })
            .await
            .unwrap();
        let service = BadgeService::new(directory, Arc::new(FailingStore), WorkPolicy::default());

        let result = service.monthly_report("emp_001", "2025-03").await;
        match result {
            Err(EngineError::Storage { message }) => assert_eq!(message, "store offline"),
            other => panic!("Expected Storage error, got {:?}", other),
        }
    }
}
