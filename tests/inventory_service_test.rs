//! Tests for InventoryService against real files

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use larder::application::services::{InventoryService, StockSummary};
use larder::application::ApplicationError;
use larder::infrastructure::traits::DiskReader;

/// Helper to create temp stock files for testing
fn create_stock_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write stock file");
    path
}

fn service() -> InventoryService {
    InventoryService::new(Arc::new(DiskReader))
}

const CAFE_STOCK: &str = r#"
[[item]]
name = "Scone"
wholesale_cost = 2
retail_value = 4
quantity = 3

[[item]]
name = "Coffee"
wholesale_cost = 1
retail_value = 3
quantity = 2

[[item]]
name = "Bagel"
wholesale_cost = 1
retail_value = 2
"#;

#[test]
fn given_stock_file_when_loading_then_items_sorted_by_name() {
    let temp = TempDir::new().unwrap();
    let path = create_stock_file(&temp, "stock.toml", CAFE_STOCK);

    let stock = service().load(&path).unwrap();

    assert_eq!(
        stock.to_string(),
        "[ Bagel, Coffee, Coffee, Scone, Scone, Scone ]"
    );
}

#[test]
fn given_stock_file_when_summarizing_then_matches_hand_totals() {
    let temp = TempDir::new().unwrap();
    let path = create_stock_file(&temp, "stock.toml", CAFE_STOCK);
    let svc = service();
    let stock = svc.load(&path).unwrap();

    let summary = svc.summarize(&stock);

    assert_eq!(
        summary,
        StockSummary {
            items: 6,
            wholesale_cost: 3 * 2 + 2 + 1,
            retail_value: 3 * 4 + 2 * 3 + 2,
        }
    );
    assert_eq!(summary.margin(), 11);
    assert_eq!(summary.to_string(), "6 items, wholesale 9, retail 20");
}

#[test]
fn given_two_orders_when_fulfilling_sequentially_then_second_runs_short() {
    let temp = TempDir::new().unwrap();
    let stock_path = create_stock_file(&temp, "stock.toml", CAFE_STOCK);
    let order_path = create_stock_file(
        &temp,
        "order.toml",
        r#"
[[item]]
name = "Scone"
wholesale_cost = 2
retail_value = 4
quantity = 2
"#,
    );
    let svc = service();
    let mut stock = svc.load(&stock_path).unwrap();
    let order = svc.load(&order_path).unwrap();

    let sold = svc.fulfil(&mut stock, &order).unwrap();
    assert_eq!(sold.retail_value, 8);
    assert_eq!(stock.count_named("Scone"), 1);

    let err = svc.fulfil(&mut stock, &order).unwrap_err();
    assert!(matches!(err, ApplicationError::Unavailable { ref name } if name == "Scone"));
    assert_eq!(stock.count_named("Scone"), 1);
}

#[test]
fn given_order_with_wrong_price_when_checking_then_not_available() {
    let temp = TempDir::new().unwrap();
    let stock_path = create_stock_file(&temp, "stock.toml", CAFE_STOCK);
    let order_path = create_stock_file(
        &temp,
        "order.toml",
        "[[item]]\nname = \"Bagel\"\nwholesale_cost = 1\nretail_value = 99\n",
    );
    let svc = service();
    let stock = svc.load(&stock_path).unwrap();
    let order = svc.load(&order_path).unwrap();

    assert!(!svc.check(&stock, &order));
}

#[test]
fn given_nonexistent_file_when_loading_then_error_names_path() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.toml");

    let err = service().load(&missing).unwrap_err();

    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn given_negative_cost_when_loading_then_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = create_stock_file(
        &temp,
        "stock.toml",
        "[[item]]\nname = \"Tea\"\nwholesale_cost = -1\nretail_value = 2\n",
    );

    let err = service().load(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::Parse { .. }));
}
