use super::location::GeoPoint;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One rainfall measurement.
///
/// Serialized field names match the persisted JSON layout
/// (`id`, `date`, `amount`, `location`, `notes`, `imageUrl`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainfallRecord {
    pub id: String,
    pub date: NaiveDate, // "YYYY-MM-DD"
    pub amount: f64,     // millimeters
    #[serde(default)]
    pub location: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>, // data URI or external URL
}

impl RainfallRecord {
    pub fn from_fields(id: String, fields: RecordFields) -> Self {
        Self {
            id,
            date: fields.date,
            amount: fields.amount,
            location: fields.location,
            notes: fields.notes,
            image_url: fields.image_url,
        }
    }

    /// The editable part of this record, used as the base for a full replace.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            date: self.date,
            amount: self.amount,
            location: self.location.clone(),
            notes: self.notes.clone(),
            image_url: self.image_url.clone(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Everything a record carries except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    pub date: NaiveDate,
    pub amount: f64,
    pub location: GeoPoint,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

impl RecordFields {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            amount,
            location: GeoPoint::unknown(),
            notes: None,
            image_url: None,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(AppError::InvalidAmount(format!(
                "{} (must be a non-negative number of millimeters)",
                self.amount
            )));
        }
        self.location.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn serializes_with_camel_case_and_skips_empty_optionals() {
        let mut fields = RecordFields::new(d("2024-01-01"), 12.5);
        fields.image_url = Some("data:image/png;base64,AAAA".into());
        let rec = RainfallRecord::from_fields("abc123xyz".into(), fields);

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["imageUrl"], "data:image/png;base64,AAAA");
        assert!(json.get("notes").is_none());
        assert_eq!(json["location"]["lat"], 0.0);
    }

    #[test]
    fn reads_browser_style_json() {
        let raw = r#"{"id":"k2j3h4g5f","date":"2024-03-10","amount":7.2,
            "location":{"lat":-33.4,"lng":-70.6,"address":"Santiago"},"notes":"tormenta"}"#;
        let rec: RainfallRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(rec.amount, 7.2);
        assert_eq!(rec.location.address.as_deref(), Some("Santiago"));
        assert_eq!(rec.notes.as_deref(), Some("tormenta"));
        assert_eq!(rec.image_url, None);
    }

    #[test]
    fn negative_or_nan_amount_is_rejected() {
        assert!(matches!(
            RecordFields::new(d("2024-01-01"), -0.1).validate(),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(RecordFields::new(d("2024-01-01"), f64::NAN).validate().is_err());
        assert!(RecordFields::new(d("2024-01-01"), 0.0).validate().is_ok());
    }
}
