use clap::Parser;

use intellisql::adapter::inbound::cli::command::Cli;
use intellisql::adapter::inbound::cli::{dispatch, output};

#[actix_web::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = dispatch(cli).await {
        output::error(&format!("{} failed: {e}", e.kind()));
        std::process::exit(1);
    }
}
