//! In-memory patient directory and employee roster.
//!
//! # Responsibility
//! - Provide the session-only CRUD surfaces behind the patient and employee
//!   dashboard pages.
//! - Derive the dashboard header counters and contact deep links.
//!
//! # Invariants
//! - Nothing here is persisted or scheduled; state lives for one session.
//! - Unknown-id mutations are silent no-ops, matching the task surface.

use crate::model::employee::{Employee, EmployeeId, EmployeeValidationError, ErrorEntry, SaleRecord};
use crate::model::patient::{Patient, PatientDraft, PatientId, PatientValidationError};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("valid digit regex"));

/// Dashboard header counters for the patient page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub purchased_this_month: usize,
    pub pending: usize,
}

/// Session-only patient collection, in insertion order.
#[derive(Debug, Default)]
pub struct PatientDirectory {
    patients: Vec<Patient>,
}

impl PatientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Adds a patient from dialog input; new patients start unpurchased.
    pub fn add(&mut self, draft: PatientDraft) -> Result<PatientId, PatientValidationError> {
        let patient = Patient::new(draft)?;
        let id = patient.id;
        self.patients.push(patient);
        Ok(id)
    }

    /// Edits a patient in place, preserving id and purchase flag.
    /// Unknown ids are a silent no-op (`Ok(false)`).
    pub fn edit(
        &mut self,
        id: PatientId,
        draft: PatientDraft,
    ) -> Result<bool, PatientValidationError> {
        let Some(patient) = self.patients.iter_mut().find(|patient| patient.id == id) else {
            return Ok(false);
        };
        patient.apply_edit(draft)?;
        Ok(true)
    }

    /// Removes a patient. Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: PatientId) -> bool {
        let before = self.patients.len();
        self.patients.retain(|patient| patient.id != id);
        self.patients.len() != before
    }

    /// Flips the monthly-purchase flag. Unknown ids are a silent no-op.
    pub fn toggle_purchase(&mut self, id: PatientId) -> bool {
        let Some(patient) = self.patients.iter_mut().find(|patient| patient.id == id) else {
            return false;
        };
        patient.purchased_this_month = !patient.purchased_this_month;
        true
    }

    /// Counters for the dashboard header.
    pub fn stats(&self) -> DirectoryStats {
        let purchased = self
            .patients
            .iter()
            .filter(|patient| patient.purchased_this_month)
            .count();
        DirectoryStats {
            total: self.patients.len(),
            purchased_this_month: purchased,
            pending: self.patients.len() - purchased,
        }
    }
}

/// Session-only employee collection, in insertion order.
#[derive(Debug, Default)]
pub struct EmployeeRoster {
    employees: Vec<Employee>,
}

impl EmployeeRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn add(
        &mut self,
        name: &str,
        birthday: NaiveDate,
        phone: &str,
    ) -> Result<EmployeeId, EmployeeValidationError> {
        let employee = Employee::new(name, birthday, phone)?;
        let id = employee.id;
        self.employees.push(employee);
        Ok(id)
    }

    /// Removes an employee. Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: EmployeeId) -> bool {
        let before = self.employees.len();
        self.employees.retain(|employee| employee.id != id);
        self.employees.len() != before
    }

    /// Appends one day's sales figure. Unknown ids are a silent no-op.
    pub fn record_sale(&mut self, id: EmployeeId, date: NaiveDate, amount_cents: i64) -> bool {
        let Some(employee) = self.find_mut(id) else {
            return false;
        };
        employee.sales.push(SaleRecord { date, amount_cents });
        true
    }

    /// Appends a logged mistake. Unknown ids are a silent no-op.
    pub fn record_error(&mut self, id: EmployeeId, date: NaiveDate, description: &str) -> bool {
        let Some(employee) = self.find_mut(id) else {
            return false;
        };
        employee.error_log.push(ErrorEntry {
            date,
            description: description.to_string(),
        });
        true
    }

    fn find_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|employee| employee.id == id)
    }
}

/// Builds the `wa.me` deep link the contact button opens.
///
/// The phone keeps digits only; the greeting is percent-encoded.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let digits = NON_DIGIT_RE.replace_all(phone, "");
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(message))
}
