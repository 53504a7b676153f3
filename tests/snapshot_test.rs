//! Decoding and rendering of quote snapshots.

use tokio_test::assert_ok;

use stockwatch::DecodeError;
use stockwatch::models::decode_snapshot;
use stockwatch::view::{self, STOCK_LIST_ID, StockList, Trend};

#[test]
fn decode_end_to_end_example() {
    let json = r#"[{"stock_code":"AAPL","stock_name":"Apple","current_price":150.2,"change_percent":1.234}]"#;

    let snapshot = assert_ok!(decode_snapshot(json));

    assert_eq!(snapshot.len(), 1);
    let record = &snapshot.records[0];
    assert_eq!(record.code, "AAPL");
    assert_eq!(record.name, "Apple");
    assert_eq!(record.price, 150.2);
    assert_eq!(record.change_percent, 1.234);
}

#[test]
fn render_formats_and_classifies() {
    let json = r#"[
        {"stock_code":"UP","stock_name":"Gainer","current_price":12,"change_percent":3},
        {"stock_code":"DN","stock_name":"Loser","current_price":8.75,"change_percent":-1.5},
        {"stock_code":"FL","stock_name":"Flat","current_price":100.00,"change_percent":0}
    ]"#;

    let rows = view::render(&decode_snapshot(json).unwrap());

    assert_eq!(rows[0].change, "3.00%");
    assert_eq!(rows[0].trend, Trend::Up);
    assert_eq!(rows[1].change, "-1.50%");
    assert_eq!(rows[1].trend, Trend::Down);
    assert_eq!(rows[1].price, "8.75");
    assert_eq!(rows[2].change, "0.00%");
    assert_eq!(rows[2].trend.class(), "up");
}

#[test]
fn consecutive_snapshots_replace_rows_in_order() {
    let first = r#"[
        {"stock_code":"A","stock_name":"a","current_price":1,"change_percent":1},
        {"stock_code":"B","stock_name":"b","current_price":1,"change_percent":1},
        {"stock_code":"C","stock_name":"c","current_price":1,"change_percent":1},
        {"stock_code":"D","stock_name":"d","current_price":1,"change_percent":1}
    ]"#;
    let second = r#"[
        {"stock_code":"Q","stock_name":"q","current_price":1,"change_percent":1},
        {"stock_code":"P","stock_name":"p","current_price":1,"change_percent":1}
    ]"#;

    let mut list = StockList::new(STOCK_LIST_ID);
    view::apply(&mut list, view::render(&decode_snapshot(first).unwrap()));
    view::apply(&mut list, view::render(&decode_snapshot(second).unwrap()));

    let codes: Vec<&str> = list.rows().iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, ["Q", "P"]);
}

#[test]
fn out_of_range_numbers_render_like_the_browser() {
    let json = r#"[
        {"stock_code":"BIG","stock_name":"Big","current_price":1e30,"change_percent":1.005},
        {"stock_code":"TNY","stock_name":"Tiny","current_price":1e-7,"change_percent":-0.001}
    ]"#;

    let rows = view::render(&assert_ok!(decode_snapshot(json)));

    assert_eq!(rows[0].price, "1e+30");
    assert_eq!(rows[0].change, "1.00%");
    assert_eq!(rows[1].price, "1e-7");
    assert_eq!(rows[1].change, "-0.00%");
    assert_eq!(rows[1].trend, Trend::Down);
}

#[test]
fn decode_rejects_wrong_types() {
    let json = r#"[{"stock_code":"AAPL","stock_name":"Apple","current_price":"n/a","change_percent":true}]"#;

    let err = decode_snapshot(json).unwrap_err();

    assert!(matches!(err, DecodeError::Malformed(_)));
}
