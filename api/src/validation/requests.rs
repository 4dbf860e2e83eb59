//! Validation of investment submission requests
//!
//! Checks run in a fixed order and stop at the first failure:
//! presence, amount parse, amount range, phone format. Country, name, network
//! and country code are only checked for presence (country code not at all).

use shared::{InvestmentRequest, Submission};

use super::validators::{parse_amount, text_of, validate_phone, validate_required};
use super::ValidationError;

/// Validate a raw request and normalize it into a `Submission`.
///
/// Pure: the same request always yields the same outcome.
pub fn validate_investment(req: &InvestmentRequest) -> Result<Submission, ValidationError> {
    let country = validate_required(req.country.as_ref(), "country")?;
    let name = validate_required(req.name.as_ref(), "name")?;
    let phone = validate_required(req.phone.as_ref(), "phone")?;
    let network = validate_required(req.network.as_ref(), "network")?;
    let amount = validate_required(req.amount.as_ref(), "amount")?;

    let amount = parse_amount(amount)?;

    let phone = text_of(phone);
    validate_phone(&phone)?;

    let country_code = req
        .country_code
        .as_ref()
        .filter(|v| !v.is_null())
        .map(text_of);

    Ok(Submission {
        country: text_of(country),
        name: text_of(name),
        phone,
        network: text_of(network),
        amount,
        country_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::AmountIssue;
    use serde_json::{json, Value};

    const REQUIRED_FIELDS: [&str; 5] = ["country", "name", "phone", "network", "amount"];

    fn valid_request() -> InvestmentRequest {
        serde_json::from_value(json!({
            "country": "sn",
            "name": "Aminata",
            "phone": "770000000",
            "network": "Orange Money",
            "amount": "5000",
            "countryCode": "+221"
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_request_is_normalized() {
        let submission = validate_investment(&valid_request()).expect("valid");
        assert_eq!(submission.country, "sn");
        assert_eq!(submission.name, "Aminata");
        assert_eq!(submission.phone, "770000000");
        assert_eq!(submission.network, "Orange Money");
        assert_eq!(submission.amount, 5000.0);
        assert_eq!(submission.country_code.as_deref(), Some("+221"));
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for name in REQUIRED_FIELDS {
            let mut req = valid_request();
            match name {
                "country" => req.country = None,
                "name" => req.name = Some(json!("")),
                "phone" => req.phone = Some(Value::Null),
                "network" => req.network = None,
                "amount" => req.amount = Some(json!(0)),
                _ => unreachable!(),
            }
            assert_eq!(
                validate_investment(&req),
                Err(ValidationError::MissingField(name)),
                "field {name}"
            );
        }
    }

    #[test]
    fn test_country_code_is_optional() {
        let mut req = valid_request();
        req.country_code = None;
        let submission = validate_investment(&req).expect("valid");
        assert!(submission.country_code.is_none());
    }

    #[test]
    fn test_presence_checked_before_amount_and_phone() {
        let mut req = valid_request();
        req.amount = Some(json!("abc"));
        req.phone = Some(json!("12-34"));
        req.network = None;
        assert_eq!(
            validate_investment(&req),
            Err(ValidationError::MissingField("network"))
        );
    }

    #[test]
    fn test_amount_checked_before_phone() {
        let mut req = valid_request();
        req.amount = Some(json!("-5"));
        req.phone = Some(json!("+221770000000"));
        assert_eq!(
            validate_investment(&req),
            Err(ValidationError::InvalidAmount(AmountIssue::NotPositive))
        );
    }

    #[test]
    fn test_invalid_phone() {
        for phone in ["123-456", "+221770000000", "77 00"] {
            let mut req = valid_request();
            req.phone = Some(json!(phone));
            assert_eq!(validate_investment(&req), Err(ValidationError::InvalidPhone));
        }
    }

    #[test]
    fn test_numeric_phone_is_accepted() {
        let mut req = valid_request();
        req.phone = Some(json!(770000000));
        assert_eq!(validate_investment(&req).unwrap().phone, "770000000");
    }

    #[test]
    fn test_no_content_validation_on_other_fields() {
        let mut req = valid_request();
        req.country = Some(json!("atlantis"));
        req.country_code = Some(json!("not a prefix"));
        assert!(validate_investment(&req).is_ok());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut bad = valid_request();
        bad.amount = Some(json!("abc"));
        let good = valid_request();
        for _ in 0..3 {
            assert_eq!(validate_investment(&good), validate_investment(&good));
            assert_eq!(
                validate_investment(&bad),
                Err(ValidationError::InvalidAmount(AmountIssue::NotANumber))
            );
        }
    }
}
