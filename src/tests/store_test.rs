use std::fs;

use rust_decimal_macros::dec;
use serial_test::serial;

use crate::functions::{current_average_rate, replay_ledger};
use crate::store::{CsvEventStore, EventStore};
use crate::structs::EngineConfig;

const DIR: &str = ".data_test/csv_store";

fn write_fixture(name: &str, content: &str) -> String {
    fs::create_dir_all(DIR).unwrap();
    let path = format!("{}/{}", DIR, name);
    fs::write(&path, content).unwrap();
    return path;
}

#[test]
#[serial]
fn test_csv_store_end_to_end() {
    let exchange_path = write_fixture(
        "exchange.csv",
        "Date,Order_ID,Type,KRW_Amount,USD_Amount,Ex_Rate,Avg,Bal,Note\n\
         2025-03-01,EX1,exchange,\"700,000\",500,1400,,,\n\
         2025-03-10,EX2,exchange,\"750,000\",500,1500,,,\n",
    );
    let dividend_path = write_fixture(
        "dividend.csv",
        "Date,Order_ID,Ticker,Amount_USD,Ex_Rate,Note\n",
    );
    let trade_path = write_fixture(
        "trade.csv",
        "Date,Order_ID,Ticker,Name,Type,Qty,Price_USD,Ex_Rate,Note\n\
         2025-03-05,TR1,VOO,Vanguard S&P 500,buy,2,100,1400,\n",
    );

    let store = CsvEventStore::new(exchange_path, dividend_path, trade_path);
    let report = replay_ledger(&store, &EngineConfig::default()).unwrap();
    assert_eq!(report.applied[0].rate, dec!(1400));
    assert_eq!(report.final_rate, dec!(1462.50000000));

    // repeated queries against an unchanged store agree
    assert_eq!(
        current_average_rate(&store, &EngineConfig::default()),
        dec!(1462.50000000)
    );

    let _ = fs::remove_dir_all(DIR);
}

#[test]
#[serial]
fn test_snapshot_keeps_row_order() {
    let exchange_path = write_fixture(
        "order.csv",
        "Date,Order_ID,Type,KRW_Amount,USD_Amount,Ex_Rate,Avg,Bal,Note\n\
         2025-01-10,EX1,exchange,100,1,,,,\n\
         2025-01-10,EX2,exchange,200,2,,,,\n",
    );
    let dividend_path = write_fixture(
        "order_div.csv",
        "Date,Order_ID,Ticker,Amount_USD,Ex_Rate,Note\n",
    );
    let trade_path = write_fixture(
        "order_trade.csv",
        "Date,Order_ID,Ticker,Name,Type,Qty,Price_USD,Ex_Rate,Note\n",
    );

    let store = CsvEventStore::new(exchange_path, dividend_path, trade_path);
    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.exchange.rows[0][1], "EX1");
    assert_eq!(snapshot.exchange.rows[1][1], "EX2");

    let _ = fs::remove_dir_all(DIR);
}

#[test]
#[serial]
fn test_unreadable_store_answers_fallback() {
    let store = CsvEventStore::new(
        ".data_test/does_not_exist/exchange.csv".to_string(),
        ".data_test/does_not_exist/dividend.csv".to_string(),
        ".data_test/does_not_exist/trade.csv".to_string(),
    );
    let config = EngineConfig::new(dec!(1500));
    assert!(store.snapshot().is_err());
    assert_eq!(current_average_rate(&store, &config), dec!(1500));
}
