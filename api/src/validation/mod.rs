//! Input Validation Module
//!
//! Validation for investment submissions received by the API.
//!
//! # Overview
//!
//! 1. **Extractors** - `SubmissionBody`, which reads JSON or form bodies into
//!    an untyped `InvestmentRequest`
//! 2. **Validators** - presence, amount and phone checks on raw JSON values
//! 3. **Requests** - `validate_investment`, the ordered check sequence that
//!    turns a raw request into a `Submission`
//!
//! # Usage
//!
//! ```ignore
//! use crate::validation::{validate_investment, SubmissionBody};
//!
//! pub async fn submit(SubmissionBody(req): SubmissionBody) -> impl IntoResponse {
//!     match validate_investment(&req) {
//!         Ok(submission) => { /* accept */ }
//!         Err(err) => { /* 400 with err.message() */ }
//!     }
//! }
//! ```
//!
//! The first failing check wins; errors are never aggregated.

pub mod extractors;
pub mod requests;
pub mod validators;

use thiserror::Error;

pub use extractors::SubmissionBody;
pub use requests::validate_investment;
pub use validators::{
    is_present, parse_amount, parse_float_prefix, validate_phone, validate_positive_amount,
    validate_required,
};

pub const MISSING_FIELD_MESSAGE: &str = "Tous les champs sont requis";
pub const INVALID_AMOUNT_MESSAGE: &str = "Le montant doit être un nombre positif";
pub const INVALID_PHONE_MESSAGE: &str = "Le numéro de téléphone ne doit contenir que des chiffres";

/// Why an amount was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountIssue {
    #[error("not a number")]
    NotANumber,
    #[error("not finite")]
    NotFinite,
    #[error("not strictly positive")]
    NotPositive,
}

/// A rejected submission. Each kind maps to one fixed client message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid amount: {0}")]
    InvalidAmount(AmountIssue),
    #[error("phone must contain only digits")]
    InvalidPhone,
}

impl ValidationError {
    /// Message returned to the client
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => MISSING_FIELD_MESSAGE,
            ValidationError::InvalidAmount(_) => INVALID_AMOUNT_MESSAGE,
            ValidationError::InvalidPhone => INVALID_PHONE_MESSAGE,
        }
    }

    /// Stable label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "missing_field",
            ValidationError::InvalidAmount(_) => "invalid_amount",
            ValidationError::InvalidPhone => "invalid_phone",
        }
    }
}
