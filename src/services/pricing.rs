//! Tiered ticket pricing.
//!
//! Small halls sell every seat at the base price. Larger halls charge the
//! base price for the front `rows / 2` rows (floor) and the discounted price
//! for the rest, so with an odd number of rows the middle row is discounted.

use crate::config::PricingConfig;

pub const BASE_PRICE: u32 = 10;
pub const DISCOUNT_PRICE: u32 = 8;
pub const SMALL_THEATER_CAPACITY: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub base_price: u32,
    pub discount_price: u32,
    /// Halls with at most this many seats have a single price
    pub small_theater_capacity: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            base_price: BASE_PRICE,
            discount_price: DISCOUNT_PRICE,
            small_theater_capacity: SMALL_THEATER_CAPACITY,
        }
    }
}

impl From<&PricingConfig> for PricingPolicy {
    fn from(config: &PricingConfig) -> Self {
        Self {
            base_price: config.base_price,
            discount_price: config.discount_price,
            small_theater_capacity: config.small_theater_capacity,
        }
    }
}

impl PricingPolicy {
    /// Price of a seat in `row` of a `rows x columns` hall.
    pub fn price(&self, row: i32, rows: i32, columns: i32) -> u32 {
        let capacity = i64::from(rows) * i64::from(columns);
        if capacity <= i64::from(self.small_theater_capacity) {
            return self.base_price;
        }

        let front_rows = rows / 2;
        if row > front_rows {
            self.discount_price
        } else {
            self.base_price
        }
    }
}
