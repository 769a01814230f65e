//! Theater behaviour: purchase state machine, pricing tiers, income and stats.

use cinema_tickets::{SeatState, Stats, Theater, TheaterError};

#[test]
fn test_construct_creates_free_grid() {
    let theater = Theater::new(4, 7).unwrap();
    assert_eq!(theater.dimensions(), (4, 7));
    assert_eq!(theater.total_seats(), 28);
    assert_eq!(theater.seats().count(), 28);
    assert!(theater.seats().all(|s| s.state() == SeatState::Free));
    assert_eq!(theater.current_income(), 0);
}

#[test]
fn test_construct_rejects_bad_dimensions() {
    assert_eq!(
        Theater::new(0, 3).unwrap_err(),
        TheaterError::InvalidDimension { rows: 0, columns: 3 }
    );
    assert_eq!(
        Theater::new(3, -2).unwrap_err(),
        TheaterError::InvalidDimension { rows: 3, columns: -2 }
    );
}

#[test]
fn test_second_purchase_is_rejected() {
    let mut theater = Theater::new(5, 5).unwrap();
    assert_eq!(theater.purchase(3, 4), Ok(10));
    assert_eq!(theater.current_income(), 10);

    let err = theater.purchase(3, 4).unwrap_err();
    assert_eq!(err, TheaterError::AlreadyReserved { row: 3, column: 4 });
    assert_eq!(err.to_string(), "That ticket has already been purchased!");
    assert_eq!(theater.current_income(), 10);
    assert_eq!(theater.tickets_sold(), 1);
}

#[test]
fn test_purchase_out_of_bounds() {
    let mut theater = Theater::new(4, 6).unwrap();
    for (row, column) in [(0, 1), (5, 1), (1, 0), (1, 7), (-3, 2)] {
        let err = theater.purchase(row, column).unwrap_err();
        assert_eq!(err, TheaterError::OutOfBounds { row, column });
        assert_eq!(err.to_string(), "Wrong input!");
    }
    assert_eq!(theater.tickets_sold(), 0);
    assert_eq!(theater.current_income(), 0);
}

#[test]
fn test_pricing_even_rows() {
    let theater = Theater::new(10, 7).unwrap();
    for row in 1..=10 {
        let expected = if row <= 5 { 10 } else { 8 };
        for column in 1..=7 {
            assert_eq!(theater.price_of(row, column), Ok(expected), "({row}, {column})");
        }
    }
    assert_eq!(theater.total_income(), 5 * 7 * 10 + 5 * 7 * 8);
}

#[test]
fn test_pricing_odd_rows_discounts_middle() {
    let theater = Theater::new(11, 6).unwrap();
    for row in 1..=5 {
        assert_eq!(theater.price_of(row, 1), Ok(10));
    }
    for row in 6..=11 {
        assert_eq!(theater.price_of(row, 1), Ok(8));
    }
    assert_eq!(theater.total_income(), 5 * 6 * 10 + 6 * 6 * 8);
}

#[test]
fn test_small_theater_is_flat() {
    let theater = Theater::new(6, 10).unwrap();
    assert!(theater
        .seats()
        .all(|seat| theater.price(seat) == 10));
    assert_eq!(theater.total_income(), 600);
}

#[test]
fn test_current_income_tracks_sold_seats() {
    let mut theater = Theater::new(9, 9).unwrap();
    let sold = [(1, 1), (4, 9), (5, 1), (9, 9), (7, 3)];
    for (row, column) in sold {
        theater.purchase(row, column).unwrap();
    }
    // 81 seats, front half is rows 1..=4
    assert_eq!(theater.current_income(), 10 + 10 + 8 + 8 + 8);

    let reserved_sum: u64 = theater
        .seats()
        .filter(|s| s.is_reserved())
        .map(|s| u64::from(theater.price(s)))
        .sum();
    assert_eq!(theater.current_income(), reserved_sum);
}

#[test]
fn test_total_income_ignores_sales() {
    let mut theater = Theater::new(8, 9).unwrap();
    let before = theater.total_income();
    theater.purchase(1, 1).unwrap();
    theater.purchase(8, 9).unwrap();
    assert_eq!(theater.total_income(), before);
}

#[test]
fn test_end_to_end_small_hall() {
    let mut theater = Theater::new(2, 3).unwrap();
    assert_eq!(theater.purchase(1, 1), Ok(10));
    assert_eq!(theater.current_income(), 10);
    assert_eq!(
        theater.purchase(1, 1),
        Err(TheaterError::AlreadyReserved { row: 1, column: 1 })
    );

    let stats = theater.stats();
    assert_eq!(
        stats,
        Stats {
            tickets_sold: 1,
            total_seats: 6,
            current_income: 10,
            total_income: 60,
        }
    );
    assert!((stats.percentage() - 100.0 / 6.0).abs() < 1e-9);
}

#[test]
fn test_seat_symbols() {
    let mut theater = Theater::new(3, 3).unwrap();
    theater.purchase(2, 2).unwrap();
    assert_eq!(theater.seat_symbol(2, 2), Ok('B'));
    assert_eq!(theater.seat_symbol(1, 1), Ok('S'));
    assert_eq!(
        theater.seat_symbol(4, 4),
        Err(TheaterError::OutOfBounds { row: 4, column: 4 })
    );
}

#[test]
fn test_full_house() {
    let mut theater = Theater::new(3, 4).unwrap();
    for row in 1..=3 {
        for column in 1..=4 {
            theater.purchase(row, column).unwrap();
        }
    }
    let stats = theater.stats();
    assert_eq!(stats.tickets_sold, 12);
    assert_eq!(stats.current_income, stats.total_income);
    assert_eq!(stats.percentage(), 100.0);
}
