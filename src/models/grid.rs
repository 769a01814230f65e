//! Seat grid: a fixed `rows x columns` block of seats in row-major order.
//!
//! Rows and seats are addressed 1-based, the way the operator sees them.
//! `index` is the only place where an address is checked against the bounds;
//! every lookup and mutation goes through it.

use crate::error::TheaterError;
use crate::models::Seat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    rows: i32,
    columns: i32,
    /// Flat storage, `(row - 1) * columns + (column - 1)`
    seats: Vec<Seat>,
}

impl SeatGrid {
    /// Builds a grid with every seat free.
    pub fn new(rows: i32, columns: i32) -> Result<Self, TheaterError> {
        let invalid = TheaterError::InvalidDimension { rows, columns };
        if rows < 1 || columns < 1 {
            return Err(invalid);
        }

        let capacity = (rows as usize)
            .checked_mul(columns as usize)
            .ok_or(invalid)?;

        let mut seats = Vec::new();
        seats.try_reserve_exact(capacity).map_err(|_| invalid)?;
        for row in 1..=rows {
            for column in 1..=columns {
                seats.push(Seat::new(row, column));
            }
        }

        Ok(Self {
            rows,
            columns,
            seats,
        })
    }

    #[inline]
    fn index(&self, row: i32, column: i32) -> Result<usize, TheaterError> {
        if row < 1 || row > self.rows || column < 1 || column > self.columns {
            return Err(TheaterError::OutOfBounds { row, column });
        }
        Ok((row as usize - 1) * self.columns as usize + (column as usize - 1))
    }

    pub fn get(&self, row: i32, column: i32) -> Result<&Seat, TheaterError> {
        let idx = self.index(row, column)?;
        Ok(&self.seats[idx])
    }

    /// Marks the addressed seat as reserved.
    pub fn set_reserved(&mut self, row: i32, column: i32) -> Result<(), TheaterError> {
        let idx = self.index(row, column)?;
        if self.seats[idx].reserve() {
            Ok(())
        } else {
            Err(TheaterError::AlreadyReserved { row, column })
        }
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (i32, i32) {
        (self.rows, self.columns)
    }

    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    /// All seats, row by row. Each call starts a fresh pass.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> + '_ {
        self.seats.iter()
    }

    /// Seats of a single row, left to right.
    pub fn row(&self, row: i32) -> Result<&[Seat], TheaterError> {
        let start = self.index(row, 1)?;
        Ok(&self.seats[start..start + self.columns as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        for (rows, columns) in [(0, 5), (5, 0), (-1, 3), (3, -7), (0, 0)] {
            assert_eq!(
                SeatGrid::new(rows, columns),
                Err(TheaterError::InvalidDimension { rows, columns })
            );
        }
    }

    #[test]
    fn seats_are_row_major() {
        let grid = SeatGrid::new(2, 3).unwrap();
        let order: Vec<(i32, i32)> = grid.seats().map(|s| (s.row(), s.column())).collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]);
        // restartable
        assert_eq!(grid.seats().count(), 6);
    }

    #[test]
    fn lookup_edges() {
        let grid = SeatGrid::new(4, 5).unwrap();
        assert_eq!(grid.get(1, 1).unwrap().column(), 1);
        assert_eq!(grid.get(4, 5).unwrap().row(), 4);

        for (row, column) in [(0, 1), (5, 1), (1, 0), (1, 6)] {
            assert_eq!(
                grid.get(row, column),
                Err(TheaterError::OutOfBounds { row, column })
            );
        }
    }

    #[test]
    fn set_reserved_only_once() {
        let mut grid = SeatGrid::new(3, 3).unwrap();
        grid.set_reserved(2, 2).unwrap();
        assert!(grid.get(2, 2).unwrap().is_reserved());
        assert_eq!(
            grid.set_reserved(2, 2),
            Err(TheaterError::AlreadyReserved { row: 2, column: 2 })
        );
        assert_eq!(
            grid.set_reserved(4, 1),
            Err(TheaterError::OutOfBounds { row: 4, column: 1 })
        );
        assert_eq!(grid.seats().filter(|s| s.is_reserved()).count(), 1);
    }

    #[test]
    fn row_slice() {
        let grid = SeatGrid::new(3, 4).unwrap();
        let row = grid.row(3).unwrap();
        assert_eq!(row.len(), 4);
        assert!(row.iter().all(|s| s.row() == 3));
        assert!(grid.row(0).is_err());
    }
}
