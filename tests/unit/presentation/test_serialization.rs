use openalgo::presentation::serialization::{
    fmt_opt, number_as_string_opt, string_as_bool_opt, string_as_float, string_as_float_opt,
    string_as_int_opt,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct Lenient {
    #[serde(default, deserialize_with = "string_as_float_opt")]
    price: Option<f64>,
    #[serde(default, deserialize_with = "string_as_float")]
    volume: f64,
    #[serde(default, deserialize_with = "string_as_int_opt")]
    quantity: Option<i64>,
    #[serde(default, deserialize_with = "number_as_string_opt")]
    orderid: Option<String>,
    #[serde(default, deserialize_with = "string_as_bool_opt")]
    flag: Option<bool>,
}

fn parse(value: serde_json::Value) -> Lenient {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_numbers_and_strings_coerce() {
    let v = parse(json!({
        "price": "1,234.50",
        "volume": 100,
        "quantity": "75.0",
        "orderid": 123456,
        "flag": "true"
    }));
    assert_eq!(v.price, Some(1234.5));
    assert_eq!(v.volume, 100.0);
    assert_eq!(v.quantity, Some(75));
    assert_eq!(v.orderid.as_deref(), Some("123456"));
    assert_eq!(v.flag, Some(true));
}

#[test]
fn test_empty_and_missing_values() {
    let v = parse(json!({"price": "", "volume": null, "orderid": ""}));
    assert_eq!(v.price, None);
    assert_eq!(v.volume, 0.0);
    assert_eq!(v.quantity, None);
    assert_eq!(v.orderid, None);
    assert_eq!(v.flag, None);
}

#[test]
fn test_fmt_opt() {
    assert_eq!(fmt_opt(Some(1.0)), "1.00");
    assert_eq!(fmt_opt(None), "-");
}
