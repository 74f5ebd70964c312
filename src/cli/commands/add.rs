use crate::cli::parser::Commands;
use crate::core::App;
use crate::errors::{AppError, AppResult};
use crate::models::location::GeoPoint;
use crate::models::record::RecordFields;
use crate::ui::messages::success;
use crate::utils::{date, image};

/// Record a new measurement.
pub fn handle(cmd: &Commands, app: &mut App) -> AppResult<()> {
    if let Commands::Add {
        date,
        amount,
        notes,
        image,
        lat,
        lng,
        address,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Location: explicit flags, then startup position, then (0, 0)
        //
        let location = match (lat, lng) {
            (Some(lat), Some(lng)) => GeoPoint::new(*lat, *lng),
            _ => app.location.clone().unwrap_or_else(GeoPoint::unknown),
        };
        let location = match address {
            Some(_) => location.with_address(address.clone()),
            None => location,
        };

        //
        // 3. Optional photo
        //
        let image_url = image.as_deref().map(image::to_image_url).transpose()?;

        let fields = RecordFields {
            date: d,
            amount: *amount,
            location,
            notes: notes.clone().filter(|n| !n.trim().is_empty()),
            image_url,
        };

        //
        // 4. Store (gate checked inside)
        //
        let rec = app.store.create(&app.session, fields)?;
        success(format!(
            "Recorded {:.1} mm for {} (id {}).",
            rec.amount, rec.date, rec.id
        ));
    }

    Ok(())
}
