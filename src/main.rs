//! rainlog main entrypoint.

use rainlog::run;
use rainlog::ui::messages::error;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
