//! Patient domain model.
//!
//! # Responsibility
//! - Define the per-session patient record shown on the pharmacy dashboard.
//! - Derive the purchase-window signals the dashboard highlights.
//!
//! # Invariants
//! - `id` is stable and never reused for another patient.
//! - A new patient always starts with `purchased_this_month = false`.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a patient.
pub type PatientId = Uuid;

/// Days before the next purchase date at which a patient is flagged.
pub const PURCHASE_DUE_SOON_DAYS: i64 = 7;

/// Validation error for patient create/edit input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientValidationError {
    /// Name is empty or whitespace-only.
    EmptyName,
}

impl Display for PatientValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "patient name must not be empty"),
        }
    }
}

impl Error for PatientValidationError {}

/// Mutable patient fields, as captured by the add/edit dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDraft {
    pub name: String,
    pub prescription: String,
    pub next_purchase_date: NaiveDate,
    pub phone: String,
    pub birthday: NaiveDate,
}

/// A tracked pharmacy patient. Session-only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    /// Stable ID assigned at creation.
    pub id: PatientId,
    pub name: String,
    /// Free-text prescription summary.
    pub prescription: String,
    /// Date the patient is expected back for a refill.
    pub next_purchase_date: NaiveDate,
    /// Whether the refill for the current month was already bought.
    pub purchased_this_month: bool,
    pub phone: String,
    pub birthday: NaiveDate,
}

impl Patient {
    /// Creates a patient from dialog input with a generated stable ID.
    pub fn new(draft: PatientDraft) -> Result<Self, PatientValidationError> {
        let draft = validate_draft(draft)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: draft.name,
            prescription: draft.prescription,
            next_purchase_date: draft.next_purchase_date,
            purchased_this_month: false,
            phone: draft.phone,
            birthday: draft.birthday,
        })
    }

    /// Replaces the editable fields, preserving `id` and the purchase flag.
    pub fn apply_edit(&mut self, draft: PatientDraft) -> Result<(), PatientValidationError> {
        let draft = validate_draft(draft)?;
        self.name = draft.name;
        self.prescription = draft.prescription;
        self.next_purchase_date = draft.next_purchase_date;
        self.phone = draft.phone;
        self.birthday = draft.birthday;
        Ok(())
    }

    /// Signed day count until the next purchase date. Negative when overdue.
    pub fn days_until_purchase(&self, today: NaiveDate) -> i64 {
        self.next_purchase_date.signed_duration_since(today).num_days()
    }

    /// Whether the dashboard should flag this patient's refill window.
    pub fn purchase_due_soon(&self, today: NaiveDate) -> bool {
        self.days_until_purchase(today) <= PURCHASE_DUE_SOON_DAYS
    }
}

fn validate_draft(mut draft: PatientDraft) -> Result<PatientDraft, PatientValidationError> {
    draft.name = draft.name.trim().to_string();
    if draft.name.is_empty() {
        return Err(PatientValidationError::EmptyName);
    }
    Ok(draft)
}
