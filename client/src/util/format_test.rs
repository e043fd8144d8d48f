use super::*;

#[test]
fn format_price_uses_two_decimals() {
    assert_eq!(format_price(12.5), "$12.50");
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(3.999), "$4.00");
}

#[test]
fn format_date_from_rfc3339() {
    assert_eq!(format_date("2024-05-01T10:00:00Z"), "2024-05-01");
    assert_eq!(format_date("2024-05-01T23:30:00-02:00"), "2024-05-01");
}

#[test]
fn format_date_from_epoch_millis() {
    assert_eq!(format_date("1700000000000"), "2023-11-14");
    assert_eq!(format_date("0"), "1970-01-01");
}

#[test]
fn format_date_passes_through_unknown_input() {
    assert_eq!(format_date("yesterday"), "yesterday");
}
