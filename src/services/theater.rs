//! Theater: seat grid + pricing + running income.
//!
//! `purchase` is the only operation that changes state. It validates the
//! address and the seat state first and only then reserves the seat and adds
//! its price to the current income, so a failed call leaves nothing behind.

use tracing::{debug, info, warn};

use crate::error::TheaterError;
use crate::models::{Seat, SeatGrid, Stats};
use crate::services::pricing::PricingPolicy;

#[derive(Debug, Clone)]
pub struct Theater {
    grid: SeatGrid,
    pricing: PricingPolicy,
    current_income: u64,
}

impl Theater {
    /// Theater with the standard 10 / 8 tariff.
    pub fn new(rows: i32, columns: i32) -> Result<Self, TheaterError> {
        Self::with_pricing(rows, columns, PricingPolicy::default())
    }

    pub fn with_pricing(
        rows: i32,
        columns: i32,
        pricing: PricingPolicy,
    ) -> Result<Self, TheaterError> {
        let grid = SeatGrid::new(rows, columns)?;
        debug!(rows, columns, "Theater created");
        Ok(Self {
            grid,
            pricing,
            current_income: 0,
        })
    }

    /// Sells the ticket for `(row, column)` and returns its price.
    pub fn purchase(&mut self, row: i32, column: i32) -> Result<u32, TheaterError> {
        let seat = match self.grid.get(row, column) {
            Ok(seat) => seat,
            Err(e) => {
                warn!(row, column, "Purchase rejected: seat out of bounds");
                return Err(e);
            }
        };

        if seat.is_reserved() {
            warn!(row, column, "Purchase rejected: already sold");
            return Err(TheaterError::AlreadyReserved { row, column });
        }

        let price = self.price(seat);
        self.grid.set_reserved(row, column)?;
        self.current_income += u64::from(price);

        info!(row, column, price, current_income = self.current_income, "Ticket sold");
        Ok(price)
    }

    /// Price of a seat under the current tariff. Not cached.
    pub fn price(&self, seat: &Seat) -> u32 {
        let (rows, columns) = self.grid.dimensions();
        self.pricing.price(seat.row(), rows, columns)
    }

    pub fn price_of(&self, row: i32, column: i32) -> Result<u32, TheaterError> {
        let seat = self.grid.get(row, column)?;
        Ok(self.price(seat))
    }

    /// Income of a full house, regardless of what has been sold.
    pub fn total_income(&self) -> u64 {
        self.grid.seats().map(|seat| u64::from(self.price(seat))).sum()
    }

    pub fn current_income(&self) -> u64 {
        self.current_income
    }

    pub fn tickets_sold(&self) -> usize {
        self.grid.seats().filter(|seat| seat.is_reserved()).count()
    }

    pub fn total_seats(&self) -> usize {
        self.grid.capacity()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            tickets_sold: self.tickets_sold(),
            total_seats: self.total_seats(),
            current_income: self.current_income,
            total_income: self.total_income(),
        }
    }

    pub fn dimensions(&self) -> (i32, i32) {
        self.grid.dimensions()
    }

    pub fn seat(&self, row: i32, column: i32) -> Result<&Seat, TheaterError> {
        self.grid.get(row, column)
    }

    /// `B` for a sold seat, `S` for a free one.
    pub fn seat_symbol(&self, row: i32, column: i32) -> Result<char, TheaterError> {
        self.grid.get(row, column).map(Seat::symbol)
    }

    pub fn seats(&self) -> impl Iterator<Item = &Seat> + '_ {
        self.grid.seats()
    }

    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }
}
