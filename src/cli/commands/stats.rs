use crate::cli::parser::Commands;
use crate::core::App;
use crate::core::stats::{TREND_WINDOW, render_bar_chart, trend_points};
use crate::errors::AppResult;
use crate::models::summary::Stats;
use crate::ui::messages::{field, header, info};
use crate::utils::colors::{RESET, color_for_amount};
use crate::utils::formatting::{bold, mm};

const CHART_WIDTH: usize = 40;

/// Dashboard view.
pub async fn handle(cmd: &Commands, app: &App) -> AppResult<()> {
    let records = app.store.list();
    if records.is_empty() {
        info("Not enough data to show metrics yet.");
        return Ok(());
    }

    let stats = Stats::compute(records);

    header("Dashboard");
    field("Total", mm(stats.total));
    field("Average", mm(stats.average));
    field(
        "Max",
        format!("{}{}{}", color_for_amount(stats.max), mm(stats.max), RESET),
    );
    field(
        "Last",
        format!("{}{}{}", color_for_amount(stats.last), mm(stats.last), RESET),
    );
    field("Records", records.len());

    header(format!("Trend (last {})", TREND_WINDOW.min(records.len())));
    print!("{}", render_bar_chart(&trend_points(records), CHART_WIDTH));

    if let Commands::Stats { tip: true } = cmd {
        let tip = app.insights().request_quick_tip(records[0].amount).await;
        header("Quick tip");
        println!("{}", bold(&tip));
    }

    Ok(())
}
