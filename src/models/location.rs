use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Coordinates attached to a measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            address: None,
        }
    }

    /// Placeholder stored when no position is known (0, 0).
    pub fn unknown() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn with_address(mut self, address: Option<String>) -> Self {
        self.address = address.filter(|a| !a.trim().is_empty());
        self
    }

    pub fn is_unknown(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0 && self.address.is_none()
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(AppError::InvalidLocation(format!(
                "latitude {} out of range [-90, 90]",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(AppError::InvalidLocation(format!(
                "longitude {} out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }

    /// Short human-readable form used in tables.
    pub fn describe(&self) -> String {
        match &self.address {
            Some(a) => a.clone(),
            None if self.is_unknown() => "--".to_string(),
            None => format!("{:.4}, {:.4}", self.lat, self.lng),
        }
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(GeoPoint::new(91.0, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, -180.5).validate().is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).validate().is_err());
        assert!(GeoPoint::new(-33.45, -70.66).validate().is_ok());
    }

    #[test]
    fn describe_prefers_address() {
        let p = GeoPoint::new(40.4168, -3.7038).with_address(Some("Madrid".into()));
        assert_eq!(p.describe(), "Madrid");
        assert_eq!(GeoPoint::unknown().describe(), "--");
        assert_eq!(GeoPoint::new(1.0, 2.0).describe(), "1.0000, 2.0000");
    }
}
