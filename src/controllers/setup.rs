use std::io;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{info, warn};

use super::{ask, write_line, Input, InputReader, WRONG_INPUT};
use crate::config::Config;
use crate::error::TheaterError;
use crate::services::{PricingPolicy, Theater};

/// Builds the theater from configured dimensions or asks the operator for them.
///
/// Returns `None` if input ends before valid dimensions are entered.
pub async fn setup_theater<R, W>(
    config: &Config,
    input: &mut InputReader<R>,
    out: &mut W,
) -> io::Result<Option<Theater>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let pricing = PricingPolicy::from(&config.pricing);
    let max_seats = config.theater.max_seats;

    if let Some((rows, columns)) = config.theater.preset_dimensions() {
        match build_theater(rows, columns, max_seats, pricing) {
            Ok(theater) => {
                info!(rows, columns, "Theater configured");
                return Ok(Some(theater));
            }
            Err(e) => warn!(rows, columns, max_seats, "Configured dimensions rejected: {}", e),
        }
    }

    loop {
        let rows = ask("Enter the number of rows:", input, out).await?;
        if rows == Input::Eof {
            return Ok(None);
        }
        let columns = ask("Enter the number of seats in each row:", input, out).await?;

        match (rows, columns) {
            (_, Input::Eof) => return Ok(None),
            (Input::Number(rows), Input::Number(columns)) => {
                match build_theater(rows, columns, max_seats, pricing) {
                    Ok(theater) => {
                        info!(rows, columns, "Theater configured");
                        return Ok(Some(theater));
                    }
                    Err(e) => {
                        warn!(rows, columns, "Dimensions rejected");
                        write_line(out, &e.to_string()).await?;
                    }
                }
            }
            _ => write_line(out, WRONG_INPUT).await?,
        }
    }
}

/// Same as `Theater::with_pricing`, plus the `max_seats` limit.
pub fn build_theater(
    rows: i32,
    columns: i32,
    max_seats: u32,
    pricing: PricingPolicy,
) -> Result<Theater, TheaterError> {
    if i64::from(rows) * i64::from(columns) > i64::from(max_seats) {
        return Err(TheaterError::InvalidDimension { rows, columns });
    }
    Theater::with_pricing(rows, columns, pricing)
}
