//! Интерактивный слой: меню оператора поверх `Theater`.
//!
//! Everything here is generic over `AsyncBufRead` / `AsyncWrite`, so the same
//! code runs against stdin/stdout in `main` and against byte buffers in tests.

pub mod analytics;
pub mod bookings;
pub mod input;
pub mod seats;
pub mod setup;

use std::io;

use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::AppState;
pub use input::{Input, InputReader};

pub const WRONG_INPUT: &str = "Wrong input!";

const MENU: &str = "1. Show the seats\n2. Buy a ticket\n3. Statistics\n0. Exit";

/// Menu commands, by the number the operator types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowSeats,
    BuyTicket,
    Statistics,
    Exit,
}

impl Command {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Command::ShowSeats),
            2 => Some(Command::BuyTicket),
            3 => Some(Command::Statistics),
            0 => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Runs the menu loop until `0` or end of input.
pub async fn run_session<R, W>(
    state: &mut AppState,
    input: &mut InputReader<R>,
    out: &mut W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        write_line(out, MENU).await?;

        let code = match input.next_input().await? {
            Input::Eof => break,
            Input::Invalid(token) => {
                debug!(%token, "Non-numeric menu input");
                write_line(out, WRONG_INPUT).await?;
                continue;
            }
            Input::Number(code) => code,
        };

        // Неизвестные пункты меню молча игнорируем
        let Some(command) = Command::from_code(code) else {
            debug!(code, "Unknown menu command");
            continue;
        };
        debug!(?command, "Menu command");

        match command {
            Command::ShowSeats => seats::show_seats(&state.theater, out).await?,
            Command::BuyTicket => {
                if !bookings::buy_ticket(state, input, out).await? {
                    break;
                }
            }
            Command::Statistics => analytics::show_statistics(state, out).await?,
            Command::Exit => break,
        }
    }

    out.flush().await
}

pub(crate) async fn write_line<W>(out: &mut W, line: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}

/// Prints a prompt and reads the answer.
pub(crate) async fn ask<R, W>(
    prompt: &str,
    input: &mut InputReader<R>,
    out: &mut W,
) -> io::Result<Input>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(out, prompt).await?;
    input.next_input().await
}
