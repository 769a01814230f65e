use thiserror::Error;

/// Ошибки инвентаря мест. Все три восстановимы: оператор просто вводит данные заново.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TheaterError {
    /// Grid requested with a non-positive (or unaddressable) number of rows or seats.
    #[error("Wrong input!")]
    InvalidDimension { rows: i32, columns: i32 },

    /// Row or seat outside `[1, rows] x [1, columns]`.
    #[error("Wrong input!")]
    OutOfBounds { row: i32, column: i32 },

    #[error("That ticket has already been purchased!")]
    AlreadyReserved { row: i32, column: i32 },
}
