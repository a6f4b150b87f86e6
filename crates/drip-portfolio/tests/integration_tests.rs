//! Integration tests for drip-portfolio.
//!
//! These tests verify end-to-end functionality with realistic portfolios.

use approx::assert_relative_eq;
use drip_portfolio::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn months(list: &[u32]) -> PaymentMonths {
    PaymentMonths::new(list.iter().copied()).unwrap()
}

/// Creates a small income portfolio as of Wednesday 2025-01-01.
fn create_income_portfolio() -> Vec<EnrichedHolding> {
    vec![
        EnrichedHolding::new(
            Stock::new("KO", 62.0, 1.94)
                .with_name("Coca-Cola")
                .with_sector("Consumer Staples")
                .with_frequency("Quarterly")
                .with_ex_dividend_date(date(2025, 3, 14))
                .with_pay_date(date(2025, 4, 1))
                .with_payment_months(months(&[3, 6, 9, 11])),
            40.0,
            2200.0,
        ),
        EnrichedHolding::new(
            Stock::new("O", 57.0, 3.16)
                .with_name("Realty Income")
                .with_sector("Real Estate")
                .with_frequency("Monthly")
                .with_ex_dividend_date(date(2025, 1, 2))
                .with_pay_date(date(2025, 1, 15))
                .with_payment_months(PaymentMonths::new(0..12).unwrap()),
            100.0,
            5600.0,
        ),
        EnrichedHolding::new(
            Stock::new("PEP", 150.0, 5.42)
                .with_name("PepsiCo")
                .with_sector("Consumer Staples")
                .with_frequency("Quarterly")
                .with_ex_dividend_date(date(2025, 3, 7))
                .with_pay_date(date(2025, 3, 31))
                .with_payment_months(months(&[0, 2, 5, 8])),
            10.0,
            1650.0,
        ),
        EnrichedHolding::new(
            Stock::new("XYZ", 20.0, 0.80)
                .with_name("Unclassified Co")
                .with_ex_dividend_date(date(2024, 12, 1)),
            50.0,
            900.0,
        ),
    ]
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn scenario_single_tech_holding() {
    let stock = Stock::new("ABC", 100.0, 4.0)
        .with_sector("Tech")
        .with_payment_months(months(&[2, 5, 8, 11]));
    let holdings = vec![EnrichedHolding::new(stock, 10.0, 900.0)];
    let config = AnalyticsConfig::default();

    let summary = calculate_summary(&holdings, &config);
    assert_relative_eq!(summary.total_value, 847.46, epsilon = 1e-9);
    assert_relative_eq!(summary.total_annual_dividend, 33.90, epsilon = 1e-9);
    assert_relative_eq!(summary.weighted_yield, 0.04, epsilon = 1e-9);

    let histogram = monthly_income(&holdings, &config);
    for (i, month) in histogram.iter().enumerate() {
        let expected = if [2, 5, 8, 11].contains(&i) { 8.47 } else { 0.0 };
        assert_relative_eq!(month.income, expected, epsilon = 1e-9);
    }
}

#[test]
fn scenario_one_year_pure_reinvestment() {
    let projection = project_growth(&GrowthInputs {
        start_value: 1000.0,
        monthly_contribution: 0.0,
        weighted_yield: 0.04,
        dividend_growth_rate: 0.0,
        price_growth_rate: 0.0,
        years: 1,
    });

    assert_eq!(projection.points[0].portfolio_value, 1000);
    let expected = 1000.0 * (1.0_f64 + 0.04 / 12.0).powi(12);
    assert_eq!(projection.points[1].portfolio_value, expected.round() as i64);
    // Year 1 income is the compounded value at the unchanged yield
    assert_relative_eq!(projection.points[1].annual_dividends, expected * 0.04, epsilon = 0.005);
}

// =============================================================================
// END-TO-END
// =============================================================================

#[test]
fn test_report_on_income_portfolio() {
    let holdings = create_income_portfolio();
    let today = date(2025, 1, 1);
    let report = PortfolioReport::compute(
        &holdings,
        today,
        &AnalyticsConfig::default(),
        &ProjectionParams::default(),
    )
    .unwrap();

    assert_eq!(report.summary.holding_count, 4);

    // Staples: 40*62 + 10*150 = 3980, Real Estate 5700, Unknown 1000
    let names: Vec<_> = report.sectors.by_value.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Real Estate", "Consumer Staples", "Unknown"]);
    assert_relative_eq!(report.sectors.by_value[0].value, 4830.51, epsilon = 1e-9);

    // Realty Income goes ex tomorrow, so it leads the upcoming list
    let upcoming = &report.calendar.upcoming_dividends;
    assert_eq!(upcoming.len(), 4);
    assert_eq!(upcoming[0].ticker, "O");
    assert_eq!(upcoming[0].days_until_ex, Some(1));
    assert_eq!(upcoming.last().unwrap().ticker, "XYZ");
    assert_eq!(upcoming.last().unwrap().days_until_ex, Some(-31));

    // PEP (buy by Thu 03-06) and KO (buy by Thu 03-13) share a window
    let windows = &report.calendar.investment_windows;
    assert_eq!(windows.len(), 2);
    let staples = windows
        .iter()
        .find(|w| w.stocks.len() == 2)
        .expect("staples window");
    assert_eq!(staples.buy_by, date(2025, 3, 6));
    assert_eq!(staples.stocks[0].ticker, "PEP");
    assert_eq!(staples.stocks[1].ticker, "KO");
    assert_eq!(staples.days, 64);

    // O goes ex on Thu 01-02, so it must be bought today
    let realty = windows.iter().find(|w| w.stocks[0].ticker == "O").unwrap();
    assert_eq!(realty.buy_by, today);
    assert_eq!(realty.days, 0);

    assert_eq!(report.projection.len(), 21);
    assert_eq!(
        report.projection.points[0].portfolio_value,
        report.summary.total_value.round() as i64
    );
}

#[test]
fn test_histogram_skips_holding_without_months() {
    let holdings = create_income_portfolio();
    let config = AnalyticsConfig::default();
    let histogram = monthly_income(&holdings, &config);

    // XYZ has no payment months; everything else pays its full annual amount
    let expected: f64 = holdings
        .iter()
        .filter(|h| !h.stock.payment_months.is_empty())
        .map(|h| config.to_display(h.annual_dividend()))
        .sum();
    let total: f64 = histogram.iter().map(|m| m.income).sum();
    assert!((total - expected).abs() <= 0.005 * 12.0);
}

#[test]
fn test_enrich_then_analyze() {
    let raw = vec![
        RawHolding {
            id: "1".into(),
            shares: 5.0,
            invested: 500.0,
            bought_on: Some(date(2023, 6, 1)),
            stock: Some(Stock::new("JNJ", 150.0, 4.96).with_sector("Health Care")),
        },
        RawHolding {
            id: "2".into(),
            shares: 1.0,
            invested: 10.0,
            bought_on: None,
            stock: None,
        },
    ];

    let err = enrich_all(raw.clone()).unwrap_err();
    assert_eq!(err, PortfolioError::missing_stock("2"));

    let holdings = enrich_all(raw.into_iter().take(1)).unwrap();
    let summary = calculate_summary(&holdings, &AnalyticsConfig::default());
    assert_eq!(summary.holding_count, 1);
    assert_relative_eq!(summary.total_value, 635.59, epsilon = 1e-9);
}

#[test]
fn test_identity_fx() {
    let holdings = create_income_portfolio();
    let config = AnalyticsConfig::new().with_fx(FxRate::identity(Currency::USD));
    let summary = calculate_summary(&holdings, &config);
    assert_relative_eq!(summary.total_value, 10680.0, epsilon = 1e-9);
    assert_relative_eq!(summary.total_invested, 10350.0, epsilon = 1e-9);
    assert_relative_eq!(summary.total_gain, 330.0, epsilon = 1e-9);
}

#[test]
fn test_report_serializes_contract_keys() {
    let report = PortfolioReport::compute(
        &create_income_portfolio(),
        date(2025, 1, 1),
        &AnalyticsConfig::default(),
        &ProjectionParams::new().with_years(2),
    )
    .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["as_of"], "2025-01-01");
    assert!(json["sectors"]["by_value"][0]["name"].is_string());
    assert_eq!(json["calendar"]["monthly_income"][0]["month"], "Jan");
    assert!(json["calendar"]["upcoming_dividends"][0]["days_until_pay"].is_number());
    assert!(json["calendar"]["investment_windows"][0]["stocks"][0]["ex_div"].is_string());
    assert_eq!(json["projection"].as_array().unwrap().len(), 3);
    assert_eq!(json["projection"][2]["label"], "Year 2");
}
