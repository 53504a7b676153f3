//! Stock detail lookup against a local fake server.

mod common;

use stockwatch::api::fetch_stock_detail;

use common::{client, serve_once};

#[tokio::test]
async fn returns_json_body() {
    let base = serve_once(
        "200 OK",
        "application/json",
        vec![r#"{"stock_code":"600519","stock_name":"Kweichow Moutai","industry":"Liquor"}"#.to_string()],
    )
    .await;

    let detail = fetch_stock_detail(&client(), &format!("{base}/api"), "600519")
        .await
        .unwrap()
        .expect("stock should be found");

    assert_eq!(detail["stock_name"], "Kweichow Moutai");
    assert_eq!(detail["industry"], "Liquor");
}

#[tokio::test]
async fn not_found_is_none() {
    let base = serve_once(
        "404 NOT FOUND",
        "application/json",
        vec![r#"{"error":"Stock not found"}"#.to_string()],
    )
    .await;

    let detail = fetch_stock_detail(&client(), &format!("{base}/api"), "XXXX")
        .await
        .unwrap();

    assert!(detail.is_none());
}

#[tokio::test]
async fn server_error_is_an_error() {
    let base = serve_once("500 Internal Server Error", "text/html", vec![]).await;

    let result = fetch_stock_detail(&client(), &format!("{base}/api"), "600519").await;

    assert!(result.is_err());
}
