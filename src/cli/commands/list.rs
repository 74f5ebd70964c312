use crate::core::App;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::image;
use crate::utils::table::{Column, Table};

/// Print the history table, newest first.
pub fn handle(app: &App) -> AppResult<()> {
    let records = app.store.list();
    if records.is_empty() {
        info("No measurements recorded yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID", 10),
        Column::new("DATE", 10),
        Column::new("MM", 7),
        Column::new("LOCATION", 22),
        Column::new("PHOTO", 14),
        Column::new("NOTES", 30),
    ]);

    for r in records {
        table.add_row(vec![
            r.id.clone(),
            r.date_str(),
            format!("{:>7.1}", r.amount),
            r.location.describe(),
            image::describe(r.image_url.as_deref()),
            r.notes.clone().unwrap_or_else(|| "--".to_string()),
        ]);
    }

    print!("{}", table.render());
    println!("{} record(s) · role: {}", records.len(), app.session.role().label());
    Ok(())
}
