//! Employee domain model.
//!
//! # Responsibility
//! - Define the per-session employee record with its sales history and
//!   error log.
//!
//! # Invariants
//! - `id` is stable and never reused for another employee.
//! - Sale amounts are integer cents; totals never accumulate float drift.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an employee.
pub type EmployeeId = Uuid;

/// Validation error for employee create input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// Name is empty or whitespace-only.
    EmptyName,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "employee name must not be empty"),
        }
    }
}

impl Error for EmployeeValidationError {}

/// One day's sales figure for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub amount_cents: i64,
}

/// One logged mistake (wrong charge, late delivery, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub date: NaiveDate,
    pub description: String,
}

/// A pharmacy employee. Session-only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Stable ID assigned at creation.
    pub id: EmployeeId,
    pub name: String,
    pub birthday: NaiveDate,
    pub phone: String,
    /// Daily sales figures, in recording order.
    pub sales: Vec<SaleRecord>,
    /// Logged mistakes, in recording order.
    pub error_log: Vec<ErrorEntry>,
}

impl Employee {
    /// Creates an employee with a generated stable ID and empty history.
    pub fn new(
        name: &str,
        birthday: NaiveDate,
        phone: &str,
    ) -> Result<Self, EmployeeValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EmployeeValidationError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            birthday,
            phone: phone.trim().to_string(),
            sales: Vec::new(),
            error_log: Vec::new(),
        })
    }

    /// Sum of all recorded sales, in cents.
    pub fn total_sales_cents(&self) -> i64 {
        self.sales.iter().map(|sale| sale.amount_cents).sum()
    }
}
