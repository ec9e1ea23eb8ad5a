use super::*;

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date")
}

fn car_stats() -> ProductStats {
    ProductStats {
        title: "Car".to_string(),
        full_price: Decimal::from(20),
        purchase_count: 2,
        total_sales: Decimal::from(33),
        average_price: Decimal::new(165, 1),
        average_discount: Decimal::new(35, 1),
    }
}

fn acme_stats() -> BrandStats {
    BrandStats {
        brand: "Acme".to_string(),
        toy_count: 1,
        total_toy_price: Decimal::from(20),
        total_sales_revenue: Decimal::from(33),
    }
}

fn single_product_summary() -> SalesSummary {
    SalesSummary {
        products: vec![car_stats()],
        brands: vec![acme_stats()],
    }
}

/// Returns the lines that follow `marker`, up to (not including) the next blank line.
fn section_after<'a>(lines: &'a [String], marker: &str) -> Vec<&'a str> {
    let start = lines
        .iter()
        .position(|l| l == marker)
        .unwrap_or_else(|| panic!("marker {marker:?} not found"));
    lines[start..]
        .iter()
        .take_while(|l| !l.is_empty())
        .map(String::as_str)
        .collect()
}

// -----------------------------------------------------------------------
// Number formatting
// -----------------------------------------------------------------------

#[test]
fn two_places_pads_whole_numbers() {
    assert_eq!(two_places(Decimal::from(20)), "20.00");
}

#[test]
fn two_places_pads_single_decimal() {
    assert_eq!(two_places(Decimal::new(35, 1)), "3.50");
}

#[test]
fn two_places_rounds_midpoint_away_from_zero() {
    assert_eq!(two_places(Decimal::new(1_005, 3)), "1.01");
    assert_eq!(two_places(Decimal::new(-1_005, 3)), "-1.01");
}

#[test]
fn two_places_rounds_repeating_values() {
    let third = Decimal::from(10) / Decimal::from(3);
    assert_eq!(two_places(third), "3.33");
}

#[test]
fn natural_strips_trailing_zeros() {
    assert_eq!(natural(Decimal::new(3300, 2)), "33");
    assert_eq!(natural(Decimal::new(1650, 2)), "16.5");
    assert_eq!(natural(Decimal::new(1999, 2)), "19.99");
}

// -----------------------------------------------------------------------
// render_report
// -----------------------------------------------------------------------

#[test]
fn banners_have_no_trailing_whitespace() {
    for line in SALES_REPORT_BANNER
        .iter()
        .chain(PRODUCTS_BANNER)
        .chain(BRANDS_BANNER)
    {
        assert_eq!(line.trim_end(), *line, "trailing padding in {line:?}");
    }
}

#[test]
fn render_report_starts_with_sales_banner_then_date() {
    let lines = render_report(&single_product_summary(), report_date());
    let banner_len = SALES_REPORT_BANNER.len();
    assert_eq!(&lines[..banner_len], SALES_REPORT_BANNER);
    assert_eq!(lines[banner_len], "Date: 2026-10-17");
}

#[test]
fn render_report_product_section_matches_worked_example() {
    let lines = render_report(&single_product_summary(), report_date());
    assert_eq!(
        section_after(&lines, "Car"),
        vec![
            "Car",
            "Full price: $20",
            "Number of purchases: 2",
            "Total sales: $33",
            "Average price: $16.5",
            "Average discount: $3.50",
        ]
    );
}

#[test]
fn render_report_brand_section_matches_worked_example() {
    let lines = render_report(&single_product_summary(), report_date());
    assert_eq!(
        section_after(&lines, "Brand: Acme"),
        vec![
            "Brand: Acme",
            "Number of toys: 1",
            "Average toy price: $20.00",
            "Total sales revenue: $33.00",
        ]
    );
}

#[test]
fn render_report_full_price_keeps_parsed_scale() {
    let mut stats = car_stats();
    stats.full_price = Decimal::new(2000, 2);
    let summary = SalesSummary {
        products: vec![stats],
        brands: vec![acme_stats()],
    };
    let lines = render_report(&summary, report_date());
    assert!(lines.iter().any(|l| l == "Full price: $20.00"));
}

#[test]
fn render_report_has_exact_layout() {
    let lines = render_report(&single_product_summary(), report_date());

    let mut expected: Vec<String> = Vec::new();
    expected.extend(SALES_REPORT_BANNER.iter().map(|l| (*l).to_string()));
    expected.push("Date: 2026-10-17".to_string());
    expected.extend(PRODUCTS_BANNER.iter().map(|l| (*l).to_string()));
    expected.push(String::new());
    expected.extend(
        [
            "Car",
            "Full price: $20",
            "Number of purchases: 2",
            "Total sales: $33",
            "Average price: $16.5",
            "Average discount: $3.50",
            "",
        ]
        .map(String::from),
    );
    expected.extend(BRANDS_BANNER.iter().map(|l| (*l).to_string()));
    expected.push(String::new());
    expected.extend(
        [
            "Brand: Acme",
            "Number of toys: 1",
            "Average toy price: $20.00",
            "Total sales revenue: $33.00",
            "",
        ]
        .map(String::from),
    );

    assert_eq!(lines, expected);
}

#[test]
fn render_report_one_section_per_product_in_order() {
    let titles = ["Zeppelin", "Abacus", "Marbles"];
    let summary = SalesSummary {
        products: titles
            .iter()
            .map(|t| ProductStats {
                title: (*t).to_string(),
                ..car_stats()
            })
            .collect(),
        brands: vec![acme_stats()],
    };
    let lines = render_report(&summary, report_date());

    let rendered: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.starts_with("Full price: "))
        .map(|(i, _)| lines[i - 1].as_str())
        .collect();
    assert_eq!(rendered, titles);
}

#[test]
fn render_report_brands_keep_summary_order() {
    let summary = SalesSummary {
        products: vec![car_stats()],
        brands: vec![
            BrandStats {
                brand: "Zoob".to_string(),
                ..acme_stats()
            },
            acme_stats(),
        ],
    };
    let lines = render_report(&summary, report_date());
    let brands: Vec<&str> = lines
        .iter()
        .filter_map(|l| l.strip_prefix("Brand: "))
        .collect();
    assert_eq!(brands, vec!["Zoob", "Acme"]);
}

#[test]
fn render_report_is_deterministic_for_same_date() {
    let summary = single_product_summary();
    assert_eq!(
        render_report(&summary, report_date()),
        render_report(&summary, report_date())
    );
}

#[test]
fn render_report_only_date_line_changes_between_days() {
    let summary = single_product_summary();
    let today = render_report(&summary, report_date());
    let tomorrow = render_report(&summary, report_date().succ_opt().expect("valid date"));

    let differing: Vec<(&String, &String)> = today
        .iter()
        .zip(tomorrow.iter())
        .filter(|(a, b)| a != b)
        .collect();
    assert_eq!(today.len(), tomorrow.len());
    assert_eq!(differing.len(), 1);
    assert_eq!(differing[0].1, "Date: 2026-10-18");
}

#[test]
fn render_report_empty_summary_has_only_banners() {
    let summary = SalesSummary {
        products: vec![],
        brands: vec![],
    };
    let lines = render_report(&summary, report_date());
    let expected_len =
        SALES_REPORT_BANNER.len() + 1 + PRODUCTS_BANNER.len() + 1 + BRANDS_BANNER.len() + 1;
    assert_eq!(lines.len(), expected_len);
}
