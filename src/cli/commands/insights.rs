use crate::core::App;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{italic, wrap_text};

const WRAP_WIDTH: usize = 88;

/// AI insights view: one analysis request, rendered verbatim with its sources.
pub async fn handle(app: &App) -> AppResult<()> {
    let records = app.store.list();
    if records.is_empty() {
        info("Record some measurements before asking for an analysis.");
        return Ok(());
    }

    info("Consulting the analysis service…");
    let insight = app
        .insights()
        .request_analysis(records, app.location.as_ref())
        .await;

    header("Analysis");
    println!("{}", wrap_text(&insight.analysis, WRAP_WIDTH));

    if !insight.sources.is_empty() {
        header("Sources");
        for (i, s) in insight.sources.iter().enumerate() {
            println!("{:>2}. {}  {}", i + 1, s.title, italic(&s.uri));
        }
    }

    Ok(())
}
