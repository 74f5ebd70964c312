use crate::cli::parser::Commands;
use crate::core::App;
use crate::errors::{AppError, AppResult};
use crate::models::location::GeoPoint;
use crate::ui::messages::success;
use crate::utils::{date, image};

/// Replace a measurement: the existing fields are the base, flags override them.
pub fn handle(cmd: &Commands, app: &mut App) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        amount,
        notes,
        clear_notes,
        image,
        clear_image,
        lat,
        lng,
        address,
    } = cmd
    {
        // refuse before touching files or reporting on ids
        if !app.session.is_privileged() {
            return Err(AppError::Unauthorized);
        }

        let mut fields = app
            .store
            .get(id)
            .map(|r| r.fields())
            .ok_or_else(|| AppError::NotFound(id.clone()))?;

        if let Some(ds) = date {
            fields.date = date::parse_date(ds).ok_or_else(|| AppError::InvalidDate(ds.clone()))?;
        }
        if let Some(a) = amount {
            fields.amount = *a;
        }

        if *clear_notes {
            fields.notes = None;
        } else if let Some(n) = notes {
            fields.notes = Some(n.clone()).filter(|n| !n.trim().is_empty());
        }

        if *clear_image {
            fields.image_url = None;
        } else if let Some(img) = image {
            fields.image_url = Some(image::to_image_url(img)?);
        }

        if let (Some(lat), Some(lng)) = (lat, lng) {
            fields.location = GeoPoint::new(*lat, *lng).with_address(fields.location.address.clone());
        }
        if address.is_some() {
            fields.location = fields.location.with_address(address.clone());
        }

        let rec = app.store.update(&app.session, id, fields)?;
        success(format!("Record {} updated ({} · {:.1} mm).", rec.id, rec.date, rec.amount));
    }

    Ok(())
}
