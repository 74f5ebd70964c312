//! One-shot position lookup at startup.

use crate::config::Config;
use crate::models::location::GeoPoint;

pub const LAT_ENV: &str = "RAINLOG_LAT";
pub const LNG_ENV: &str = "RAINLOG_LNG";

/// Current coordinates from the environment, falling back to the config file.
/// Failures are logged and leave the location unknown.
pub fn resolve_location(cfg: &Config) -> Option<GeoPoint> {
    resolve_with(cfg, |key| std::env::var(key).ok())
}

pub fn resolve_with<F>(cfg: &Config, lookup: F) -> Option<GeoPoint>
where
    F: Fn(&str) -> Option<String>,
{
    let from_env = (lookup(LAT_ENV), lookup(LNG_ENV));

    let (lat, lng) = match from_env {
        (Some(lat), Some(lng)) => match (lat.trim().parse::<f64>(), lng.trim().parse::<f64>()) {
            (Ok(lat), Ok(lng)) => (lat, lng),
            _ => {
                tracing::warn!(%lat, %lng, "geolocation: unparsable coordinates in environment");
                return None;
            }
        },
        (None, None) => match (cfg.latitude, cfg.longitude) {
            (Some(lat), Some(lng)) => (lat, lng),
            (None, None) => {
                tracing::debug!("geolocation: no coordinates configured");
                return None;
            }
            _ => {
                tracing::warn!("geolocation: config has only one of latitude/longitude");
                return None;
            }
        },
        _ => {
            tracing::warn!("geolocation: both {LAT_ENV} and {LNG_ENV} must be set");
            return None;
        }
    };

    let point = GeoPoint::new(lat, lng).with_address(cfg.address.clone());
    if let Err(e) = point.validate() {
        tracing::warn!(error = %e, "geolocation: ignoring coordinates");
        return None;
    }
    Some(point)
}
