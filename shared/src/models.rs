use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

// ═══════════════════════════════════════════════════════════════════════════
// INVESTMENT SUBMISSION TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// Raw investment submission as received from a client.
///
/// Every field is kept as an untyped JSON value: clients send `amount` as
/// either a string or a number, and presence is judged on the raw value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRequest {
    #[serde(default)]
    pub country: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub network: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub country_code: Option<Value>,
}

/// A submission that passed validation, before the server stamps it.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub country: String,
    pub name: String,
    /// Digits only, exactly as sent.
    pub phone: String,
    pub network: String,
    /// Strictly positive and finite.
    pub amount: f64,
    pub country_code: Option<String>,
}

impl Submission {
    /// Stamp the submission with a time-based identifier and an acceptance
    /// timestamp.
    ///
    /// The identifier is the acceptance instant in Unix milliseconds. Two
    /// submissions accepted in the same millisecond share an id.
    pub fn accept(self, accepted_at: DateTime<Utc>) -> Investment {
        Investment {
            id: accepted_at.timestamp_millis(),
            accepted_at,
            submission: self,
        }
    }

    /// Dialing prefix and local number separated by a single space.
    pub fn formatted_phone(&self) -> String {
        match self.country_code.as_deref() {
            Some(code) if !code.is_empty() => format!("{} {}", code, self.phone),
            _ => self.phone.clone(),
        }
    }
}

/// An accepted investment intent. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Investment {
    pub id: i64,
    pub accepted_at: DateTime<Utc>,
    pub submission: Submission,
}

impl Investment {
    pub fn timestamp(&self) -> String {
        self.accepted_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn receipt(&self) -> InvestmentReceipt {
        InvestmentReceipt {
            id: self.id,
            country: self.submission.country.clone(),
            name: self.submission.name.clone(),
            phone: self.submission.formatted_phone(),
            network: self.submission.network.clone(),
            amount: self.submission.amount,
            timestamp: self.timestamp(),
        }
    }
}

/// `data` payload of a successful submission response.
#[derive(Debug, Clone, Serialize)]
pub struct InvestmentReceipt {
    pub id: i64,
    pub country: String,
    pub name: String,
    pub phone: String,
    pub network: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub timestamp: String,
}

/// Largest integer an f64 represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Whole amounts go out as JSON integers (`5000`, not `5000.0`).
fn serialize_amount<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if amount.fract() == 0.0 && amount.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}
