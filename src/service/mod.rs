//! Application services.
//!
//! Services sit between the HTTP layer and the stores. They validate input,
//! consult the employee directory, fetch event snapshots and hand them to the
//! pure calculation core.

mod badge;
mod employee;

pub use badge::BadgeService;
pub use employee::EmployeeService;
