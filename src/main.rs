use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_tickets::{
    config::Config,
    controllers::{self, setup::setup_theater, InputReader},
    AppState,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr, stdout belongs to the operator
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting cinema ticket office");

    let mut input = InputReader::new(BufReader::new(tokio::io::stdin()));
    let mut stdout = tokio::io::stdout();

    let Some(theater) = setup_theater(&config, &mut input, &mut stdout)
        .await
        .context("Failed to set up the theater")?
    else {
        info!("Input closed before the theater was set up");
        return Ok(());
    };

    let (rows, columns) = theater.dimensions();
    info!(rows, columns, "Theater ready");

    let mut state = AppState::new(config, theater);
    controllers::run_session(&mut state, &mut input, &mut stdout)
        .await
        .context("Operator session failed")?;

    let stats = state.theater.stats();
    info!(
        tickets_sold = stats.tickets_sold,
        current_income = stats.current_income,
        "Session finished"
    );
    Ok(())
}
