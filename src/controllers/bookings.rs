use std::io;

use tokio::io::{AsyncBufRead, AsyncWrite};

use super::{ask, write_line, Input, InputReader, WRONG_INPUT};
use crate::AppState;

/// Покупка билета: спрашиваем ряд и место, пока покупка не пройдёт.
///
/// Returns `false` if input ended before a ticket was sold.
pub async fn buy_ticket<R, W>(
    state: &mut AppState,
    input: &mut InputReader<R>,
    out: &mut W,
) -> io::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let row = ask("Enter a row number:", input, out).await?;
        if row == Input::Eof {
            return Ok(false);
        }
        let column = ask("Enter a seat number in that row:", input, out).await?;

        let (row, column) = match (row, column) {
            (_, Input::Eof) => return Ok(false),
            (Input::Number(row), Input::Number(column)) => (row, column),
            _ => {
                write_line(out, WRONG_INPUT).await?;
                continue;
            }
        };

        match state.theater.purchase(row, column) {
            Ok(price) => {
                let line = format!("Ticket price: {}{}", state.config.app.currency, price);
                write_line(out, &line).await?;
                return Ok(true);
            }
            Err(e) => write_line(out, &e.to_string()).await?,
        }
    }
}
