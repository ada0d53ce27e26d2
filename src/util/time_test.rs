use super::*;

// 2025-01-15 17:30:00 UTC == 2025-01-15 12:30:00 EST
const JAN_15_2025_UTC_1730: f64 = 1_736_962_200_000.0;

#[test]
fn format_est_applies_fixed_offset() {
    assert_eq!(format_est(JAN_15_2025_UTC_1730), "2025-01-15 12:30:00 EST");
}

#[test]
fn format_est_epoch_zero() {
    assert_eq!(format_est(0.0), "1969-12-31 19:00:00 EST");
}

#[test]
fn format_clock_renders_time_of_day() {
    assert_eq!(format_clock(JAN_15_2025_UTC_1730), "12:30:00");
}

#[test]
fn format_est_crosses_date_boundary() {
    // 02:00 UTC is still the previous day in EST.
    let two_am_utc = JAN_15_2025_UTC_1730 - (17.5 - 2.0) * 3_600_000.0;
    assert_eq!(format_est(two_am_utc), "2025-01-14 21:00:00 EST");
}
