//! File-backed state across store reopens, as separate CLI invocations
//! would see it.

#![allow(clippy::unwrap_used)]

use secureview_core::{OrderStatus, ProductId};
use secureview_integration_tests::TestContext;
use secureview_storefront::cart::CartStore;
use secureview_storefront::catalog::Catalog;
use secureview_storefront::checkout::{CheckoutService, PaymentFlow};
use secureview_storefront::history::ViewingHistoryStore;
use secureview_storefront::keys;
use secureview_storefront::kv::KvStore;
use secureview_storefront::models::ShippingAddress;
use secureview_storefront::orders::{OrderRepository, OrderSequence};
use secureview_storefront::session::SessionStore;

fn shipping() -> ShippingAddress {
    ShippingAddress {
        name: "Test User".to_owned(),
        address: "1 Main St".to_owned(),
        city: "Pune".to_owned(),
        postal_code: "411001".to_owned(),
        country: "India".to_owned(),
    }
}

#[test]
fn test_cart_and_session_survive_reopen() {
    let ctx = TestContext::new();
    let catalog = Catalog::secureview();

    SessionStore::new(&ctx.store, &ctx.directory)
        .login("test@example.com", "password123")
        .unwrap();
    CartStore::new(&ctx.store)
        .add_to_cart(catalog.find(&ProductId::new("prod_001")).unwrap(), 2)
        .unwrap();

    let reopened = ctx.reopen();
    let session = SessionStore::new(&reopened, &ctx.directory);
    assert!(session.is_authenticated());
    let items = CartStore::new(&reopened).items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
}

#[test]
fn test_order_ids_keep_increasing_across_reopens() {
    let ctx = TestContext::new();
    let catalog = Catalog::secureview();
    SessionStore::new(&ctx.store, &ctx.directory)
        .login("test@example.com", "password123")
        .unwrap();

    CartStore::new(&ctx.store)
        .add_to_cart(catalog.find(&ProductId::new("prod_001")).unwrap(), 1)
        .unwrap();
    let first = CheckoutService::new(&ctx.store)
        .place_order(shipping(), PaymentFlow::Direct)
        .unwrap();
    assert_eq!(first.id.as_str(), "PSOID001");

    let reopened = ctx.reopen();
    CartStore::new(&reopened)
        .add_to_cart(catalog.find(&ProductId::new("prod_002")).unwrap(), 1)
        .unwrap();
    let second = CheckoutService::new(&reopened)
        .place_order(shipping(), PaymentFlow::Direct)
        .unwrap();
    assert_eq!(second.id.as_str(), "PSOID002");

    assert_eq!(OrderRepository::new(&reopened).all_orders().len(), 2);
}

#[test]
fn test_admin_status_change_is_visible_after_reopen() {
    let ctx = TestContext::new();
    let catalog = Catalog::secureview();
    SessionStore::new(&ctx.store, &ctx.directory)
        .login("test@example.com", "password123")
        .unwrap();
    CartStore::new(&ctx.store)
        .add_to_cart(catalog.find(&ProductId::new("prod_003")).unwrap(), 1)
        .unwrap();
    let order = CheckoutService::new(&ctx.store)
        .place_order(shipping(), PaymentFlow::Direct)
        .unwrap();

    OrderRepository::new(&ctx.store)
        .update_order_status(&order.id, OrderStatus::Confirmed)
        .unwrap();

    let reopened = ctx.reopen();
    let found = OrderRepository::new(&reopened).find_order(&order.id).unwrap();
    assert_eq!(found.status, OrderStatus::Confirmed);
}

#[test]
fn test_corrupt_entries_degrade_without_poisoning_the_store() {
    let ctx = TestContext::new();

    ctx.store.set(keys::VIEWING_HISTORY, "not json").unwrap();
    ctx.store.set(keys::CART_ITEMS, "[{broken").unwrap();

    let reopened = ctx.reopen();
    assert!(ViewingHistoryStore::new(&reopened).history().is_empty());
    assert!(CartStore::new(&reopened).items().is_empty());

    // The store stays usable after degradation
    let history = ViewingHistoryStore::new(&reopened);
    history.add_to_history(&ProductId::new("prod_008")).unwrap();
    assert_eq!(history.history(), vec![ProductId::new("prod_008")]);
}

#[test]
fn test_stored_blobs_keep_their_wire_shape() {
    let ctx = TestContext::new();
    let catalog = Catalog::secureview();

    SessionStore::new(&ctx.store, &ctx.directory)
        .login("test@example.com", "password123")
        .unwrap();
    CartStore::new(&ctx.store)
        .add_to_cart(catalog.find(&ProductId::new("prod_001")).unwrap(), 2)
        .unwrap();
    CheckoutService::new(&ctx.store)
        .place_order(
            shipping(),
            PaymentFlow::ManualReceipt {
                receipt_filename: "receipt.png".to_owned(),
            },
        )
        .unwrap();

    // Cart lines keep product fields flattened next to the quantity
    let raw_orders = ctx.store.get(keys::GLOBAL_ALL_ORDERS).unwrap().unwrap();
    let orders: serde_json::Value = serde_json::from_str(&raw_orders).unwrap();
    assert_eq!(orders[0]["id"], "PSOID001");
    assert_eq!(orders[0]["status"], "Awaiting Payment Confirmation");
    assert_eq!(orders[0]["items"][0]["id"], "prod_001");
    assert_eq!(orders[0]["items"][0]["quantity"], 2);
    assert_eq!(orders[0]["shippingAddress"]["postalCode"], "411001");

    // The counter is a bare number, not JSON
    let raw_counter = ctx.store.get(keys::LAST_ORDER_NUMBER).unwrap().unwrap();
    assert_eq!(raw_counter, "1");
}

#[test]
fn test_counter_outlives_a_cleared_order_collection() {
    let ctx = TestContext::new();
    let sequence = OrderSequence::new(&ctx.store);
    sequence.next().unwrap();
    sequence.next().unwrap();

    ctx.store.remove(keys::GLOBAL_ALL_ORDERS).unwrap();

    let reopened = ctx.reopen();
    assert_eq!(OrderSequence::new(&reopened).next().unwrap().as_str(), "PSOID003");
}
