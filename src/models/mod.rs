pub mod insight;
pub mod location;
pub mod record;
pub mod summary;

pub use insight::{Source, WeatherInsight};
pub use location::GeoPoint;
pub use record::{RainfallRecord, RecordFields};
pub use summary::{Stats, TrendPoint};
