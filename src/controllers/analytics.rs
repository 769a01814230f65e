//! analytics.rs
//!
//! Статистика продаж по залу:
//! - количество проданных билетов и процент заполненности;
//! - текущая выручка и выручка при полном зале.
//!
//! Текстовый вывод по умолчанию, JSON при `app.stats_format = "json"`.

use serde::Serialize;
use std::io;
use tokio::io::AsyncWrite;

use super::write_line;
use crate::config::{AppConfig, StatsFormat};
use crate::models::Stats;
use crate::AppState;

#[derive(Debug, Serialize)]
struct StatsResponse {
    #[serde(flatten)]
    stats: Stats,
    percentage: f64,
}

/// Renders the statistics block in the configured format.
pub fn format_statistics(stats: &Stats, app: &AppConfig) -> Result<String, serde_json::Error> {
    let rendered = match app.stats_format {
        StatsFormat::Text => format!(
            "Number of purchased tickets: {}\nPercentage: {:.2}%\nCurrent income: {}{}\nTotal income: {}{}",
            stats.tickets_sold,
            stats.percentage(),
            app.currency,
            stats.current_income,
            app.currency,
            stats.total_income,
        ),
        StatsFormat::Json => serde_json::to_string(&StatsResponse {
            stats: *stats,
            percentage: stats.percentage(),
        })?,
    };
    Ok(rendered)
}

pub async fn show_statistics<W>(state: &AppState, out: &mut W) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let stats = state.theater.stats();
    tracing::debug!(
        "Статистика: {} из {} мест продано, выручка {}",
        stats.tickets_sold,
        stats.total_seats,
        stats.current_income
    );

    let rendered = format_statistics(&stats, &state.config.app)?;
    write_line(out, &rendered).await
}
