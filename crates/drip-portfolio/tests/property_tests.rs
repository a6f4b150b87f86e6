//! Property-based tests for portfolio invariants.
//!
//! These tests verify key properties that should always hold:
//! - Sector values sum to the portfolio total
//! - The monthly histogram sums to the annual income of scheduled payers
//! - Upcoming events are ordered by their nearest future date
//! - Investment windows are disjoint, bounded and ranked
//! - Projections have one point per year

use drip_core::calendars::{Calendar, WeekendCalendar};
use drip_portfolio::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

const SECTORS: [&str; 5] = ["Utilities", "Energy", "", "Financials", "Real Estate"];

/// Generates N holdings with varying prices, payouts, schedules and dates.
fn generate_holdings(n: usize, seed: u64) -> Vec<EnrichedHolding> {
    let base = Date::from_ymd(2025, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let hash = simple_hash(seed, i as u64);
            let price = 5.0 + (hash % 2000) as f64 / 10.0;
            let dps = (hash % 800) as f64 / 100.0;
            let shares = 1.0 + (hash % 300) as f64;

            let schedule = match hash % 4 {
                0 => PaymentMonths::empty(),
                1 => PaymentMonths::new([(hash % 12) as u32]).unwrap(),
                2 => PaymentMonths::new((0..4).map(|q| ((hash % 3) as u32) + q * 3)).unwrap(),
                _ => PaymentMonths::new(0..12).unwrap(),
            };

            let mut stock = Stock::new(format!("T{i}"), price, dps)
                .with_sector(SECTORS[(hash % 5) as usize])
                .with_payment_months(schedule);
            if hash % 3 != 0 {
                stock = stock.with_ex_dividend_date(base.add_days((hash % 90) as i64 - 20));
            }
            if hash % 5 != 0 {
                stock = stock.with_pay_date(base.add_days((hash % 120) as i64 - 10));
            }

            EnrichedHolding::new(stock, shares, price * shares * 0.9)
        })
        .collect()
}

fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

fn today() -> Date {
    Date::from_ymd(2025, 1, 1).unwrap()
}

// =============================================================================
// PROPERTY: SUMMARY
// =============================================================================

#[test]
fn property_summary_totals() {
    let config = AnalyticsConfig::default();

    for seed in 0..10 {
        for size in [0, 1, 5, 25, 100] {
            let holdings = generate_holdings(size, seed);
            let summary = calculate_summary(&holdings, &config);

            let raw: f64 = holdings.iter().map(|h| h.shares * h.stock.price).sum();
            assert!(
                (summary.total_value - raw / 1.18).abs() <= 0.0051,
                "total_value {} vs {} for size={size}, seed={seed}",
                summary.total_value,
                raw / 1.18
            );
            assert_eq!(summary.holding_count, size);
        }
    }
}

// =============================================================================
// PROPERTY: SECTOR VALUES SUM TO TOTAL
// =============================================================================

#[test]
fn property_sector_values_sum_to_total() {
    let config = AnalyticsConfig::default();

    for seed in 0..10 {
        for size in [1, 5, 25, 100] {
            let holdings = generate_holdings(size, seed);
            let summary = calculate_summary(&holdings, &config);
            let sectors = bucket_by_sector(&holdings, &config);

            let total: f64 = sectors.by_value.iter().map(|s| s.value).sum();
            let tolerance = 0.005 * (sectors.sector_count() as f64 + 1.0);
            assert!(
                (total - summary.total_value).abs() <= tolerance,
                "sector sum {total} vs total {} for size={size}, seed={seed}",
                summary.total_value
            );

            for list in [&sectors.by_value, &sectors.by_dividend] {
                assert!(list.windows(2).all(|p| p[0].value >= p[1].value));
                assert!(list.iter().all(|s| !s.name.is_empty()));
            }
            assert_eq!(sectors.by_value.len(), sectors.by_dividend.len());
        }
    }
}

// =============================================================================
// PROPERTY: HISTOGRAM
// =============================================================================

#[test]
fn property_histogram_matches_scheduled_income() {
    let config = AnalyticsConfig::default();

    for seed in 0..10 {
        let holdings = generate_holdings(50, seed);
        let histogram = monthly_income(&holdings, &config);
        assert_eq!(histogram.len(), 12);

        let expected: f64 = holdings
            .iter()
            .filter(|h| !h.stock.payment_months.is_empty())
            .map(|h| config.to_display(h.annual_dividend()))
            .sum();
        let total: f64 = histogram.iter().map(|m| m.income).sum();
        assert!((total - expected).abs() <= 0.061, "seed={seed}");
    }
}

// =============================================================================
// PROPERTY: UPCOMING ORDER
// =============================================================================

#[test]
fn property_upcoming_sorted_and_filtered() {
    let config = AnalyticsConfig::default();

    for seed in 0..10 {
        let holdings = generate_holdings(60, seed);
        let events = upcoming_dividends(&holdings, today(), &config);

        let dated = holdings.iter().filter(|h| h.stock.has_dividend_date()).count();
        assert_eq!(events.len(), dated);

        let keys: Vec<_> = events.iter().map(UpcomingDividend::sort_key).collect();
        let first_none = keys.iter().position(Option::is_none).unwrap_or(keys.len());
        assert!(keys[first_none..].iter().all(Option::is_none));
        assert!(keys[..first_none].windows(2).all(|p| p[0] <= p[1]));
    }
}

// =============================================================================
// PROPERTY: INVESTMENT WINDOWS
// =============================================================================

#[test]
fn property_windows_disjoint_bounded_ranked() {
    let config = AnalyticsConfig::default();

    for seed in 0..20 {
        let holdings = generate_holdings(80, seed);
        let windows = investment_windows(&holdings, today(), &config);
        assert!(windows.len() <= 5);

        let mut seen = HashSet::new();
        for window in &windows {
            assert!(window.days >= 0);
            for member in &window.stocks {
                assert!(seen.insert(member.ticker.clone()), "duplicate {}", member.ticker);
                assert!(member.ex_div > today());
                assert!(member.ex_div > window.buy_by);

                let member_buy_by = WeekendCalendar.business_day_before(member.ex_div);
                let offset = window.buy_by.days_between(&member_buy_by);
                assert!((0..=7).contains(&offset), "{} is {offset} days from anchor", member.ticker);
            }
            let anchor = &window.stocks[0];
            assert_eq!(WeekendCalendar.business_day_before(anchor.ex_div), window.buy_by);
        }
        assert!(windows
            .windows(2)
            .all(|p| p[0].total_dividend >= p[1].total_dividend));
    }
}

// =============================================================================
// PROPERTY: PROJECTION
// =============================================================================

proptest! {
    #[test]
    fn prop_projection_shape(
        start in 0.0f64..1_000_000.0,
        monthly in 0.0f64..5_000.0,
        yld in 0.0f64..0.15,
        g_div in -0.05f64..0.15,
        g_price in -0.10f64..0.15,
        years in 0u32..40,
    ) {
        let projection = project_growth(&GrowthInputs {
            start_value: start,
            monthly_contribution: monthly,
            weighted_yield: yld,
            dividend_growth_rate: g_div,
            price_growth_rate: g_price,
            years,
        });

        prop_assert_eq!(projection.len(), years as usize + 1);
        prop_assert_eq!(projection.points[0].portfolio_value, start.round() as i64);
        for (i, point) in projection.points.iter().enumerate() {
            prop_assert_eq!(point.year as usize, i);
            prop_assert!((point.monthly_dividends - point.annual_dividends / 12.0).abs() <= 0.01);
        }

        // Contributions are linear in time
        let last = projection.final_year().unwrap();
        let contributed = start + monthly * 12.0 * f64::from(years);
        prop_assert!((last.total_contributed as f64 - contributed).abs() <= 1.0);
    }

    #[test]
    fn prop_pure_reinvestment_compounds(
        start in 1.0f64..100_000.0,
        yld in 0.0f64..0.12,
        years in 1u32..10,
    ) {
        let projection = project_growth(&GrowthInputs {
            start_value: start,
            monthly_contribution: 0.0,
            weighted_yield: yld,
            dividend_growth_rate: 0.0,
            price_growth_rate: 0.0,
            years,
        });
        let expected = start * (1.0 + yld / 12.0).powi(12 * years as i32);
        let actual = projection.final_year().unwrap().portfolio_value as f64;
        prop_assert!((actual - expected).abs() <= 0.5 + expected * 1e-9);
    }
}
