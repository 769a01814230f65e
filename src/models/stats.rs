use serde::Serialize;

/// Snapshot of sales for the theater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub tickets_sold: usize,
    pub total_seats: usize,
    /// Income from completed purchases
    pub current_income: u64,
    /// Income of a full house at current prices
    pub total_income: u64,
}

impl Stats {
    /// Occupancy in percent, unrounded.
    pub fn percentage(&self) -> f64 {
        if self.total_seats == 0 {
            return 0.0;
        }
        (self.tickets_sold * 100) as f64 / self.total_seats as f64
    }
}
