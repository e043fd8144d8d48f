use super::*;

#[test]
fn parse_product_form_builds_input() {
    assert_eq!(
        parse_product_form(" Mug ", " Ceramic ", "4.50"),
        Ok(ProductInput { name: "Mug".to_owned(), description: Some("Ceramic".to_owned()), price: 4.5 })
    );
}

#[test]
fn parse_product_form_blank_description_is_none() {
    let input = parse_product_form("Mug", "   ", "3").unwrap();
    assert_eq!(input.description, None);
}

#[test]
fn parse_product_form_requires_name() {
    assert_eq!(parse_product_form("  ", "", "3"), Err("Product name is required"));
}

#[test]
fn parse_product_form_rejects_bad_prices() {
    for raw in ["", "abc", "-1", "NaN", "inf"] {
        assert_eq!(parse_product_form("Mug", "", raw), Err("Enter a valid price"), "price {raw:?}");
    }
}

#[test]
fn parse_product_form_accepts_zero_price() {
    assert_eq!(parse_product_form("Sample", "", "0").map(|p| p.price), Ok(0.0));
}
