use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::services::Theater;

/// Схема зала: номера мест сверху, номера рядов слева.
///
/// ```text
/// Cinema:
///   1 2 3
/// 1 B S S
/// 2 S S S
/// ```
pub fn seat_map(theater: &Theater) -> String {
    let (_, columns) = theater.dimensions();

    let mut map = String::from("Cinema:\n  ");
    for column in 1..=columns {
        map.push_str(&format!("{column} "));
    }
    map.push('\n');

    for seat in theater.seats() {
        if seat.column() == 1 {
            map.push_str(&format!("{} ", seat.row()));
        }
        map.push(seat.symbol());
        map.push(' ');
        if seat.column() == columns {
            map.push('\n');
        }
    }
    map
}

pub async fn show_seats<W>(theater: &Theater, out: &mut W) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(seat_map(theater).as_bytes()).await?;
    out.flush().await
}
