use std::time::Duration;

use stockroom::clients::CatalogAccess;
use stockroom::fixtures::FixtureSet;
use stockroom::lifecycle::RetailSystem;
use stockroom::model::OrderStatus;
use stockroom::notify::ToastKind;
use stockroom::query::{OrderCriteria, ProductCriteria, StatusFilter, VendorFilter};
use stockroom::session::SessionError;

/// Full end-to-end integration test with all real actors, seeded from the
/// bundled fixtures.
#[tokio::test]
async fn test_full_retail_system_integration() {
    let fixtures = FixtureSet::bundled().expect("bundled fixtures must parse");
    let order_total = fixtures.orders.len();
    let product_total = fixtures.products.len();
    let system = RetailSystem::start(fixtures).expect("system must start");

    // Dashboard summary spans both catalogs.
    let summary = system.summary().await.expect("summary failed");
    assert_eq!(summary.total_orders, order_total);
    assert_eq!(summary.total_products, product_total);
    let counted =
        summary.processing_orders + summary.available_orders + summary.not_available_orders;
    assert!(counted <= summary.total_orders);

    // Order listing: search composes with the status gate, and the view is
    // always most-recent-first.
    let criteria = OrderCriteria::new("", StatusFilter::Only(OrderStatus::Processing));
    let processing = system.orders.list(criteria).await.expect("list failed");
    assert!(!processing.is_empty());
    assert!(processing
        .iter()
        .all(|o| o.order_status == OrderStatus::Processing));
    for pair in processing.windows(2) {
        assert!(pair[0].create_date >= pair[1].create_date);
    }

    // Recent orders for the dashboard panel.
    let recent = system.orders.recent(5).await.expect("recent failed");
    assert_eq!(recent.len(), 5.min(order_total));
    for pair in recent.windows(2) {
        assert!(pair[0].create_date >= pair[1].create_date);
    }

    // Product catalog: point lookup, vendor filter, vendor options.
    let product = system
        .products
        .get("10234-BLK".to_string())
        .await
        .expect("get failed")
        .expect("product must exist");
    assert_eq!(product.title, "Ridgeline Trail Runner");

    let vendors = system
        .products
        .vendor_options()
        .await
        .expect("vendors failed");
    assert!(vendors.contains(&"Northtrail".to_string()));

    let criteria = ProductCriteria::new("blk", VendorFilter::All);
    let hits = system.products.list(criteria).await.expect("list failed");
    assert!(hits.iter().any(|p| p.item_number == "10234-BLK"));
    assert!(hits.iter().all(|p| !p.item_number.contains("WHT")));

    // Store directory.
    let stores = system.stores.all().await.expect("stores failed");
    assert_eq!(stores.len(), 3);
    let store = system
        .stores
        .get("102".to_string())
        .await
        .expect("get failed")
        .expect("store must exist");
    assert!(store.manager.is_none());

    // Graceful shutdown.
    system.shutdown().await.expect("shutdown failed");
}

/// The order-to-product join through the full system, including the
/// fixture order that references a retired item.
#[tokio::test]
async fn test_order_product_join() {
    let fixtures = FixtureSet::bundled().unwrap();
    let system = RetailSystem::start(fixtures).unwrap();

    // A live join resolves the product panel.
    let view = system
        .orders
        .order_with_product("ORD-240105-001".to_string())
        .await
        .expect("join failed")
        .expect("order must exist");
    assert_eq!(view.order.item_number, "10234-BLK");
    assert_eq!(
        view.product.as_ref().map(|p| p.item_number.as_str()),
        Some("10234-BLK")
    );

    // The retired-item order resolves to a product-less view, not an error.
    let view = system
        .orders
        .order_with_product("ORD-240226-001".to_string())
        .await
        .expect("join failed")
        .expect("order must exist");
    assert_eq!(view.order.item_number, "90001-RET");
    assert!(view.product.is_none());

    // An unknown order number is None, not an error.
    let missing = system
        .orders
        .order_with_product("ORD-999999-999".to_string())
        .await
        .expect("join failed");
    assert!(missing.is_none());

    system.shutdown().await.unwrap();
}

/// Session and notification services running alongside the catalogs.
#[tokio::test]
async fn test_session_and_notifications() {
    let fixtures = FixtureSet::bundled().unwrap();
    let system = RetailSystem::start(fixtures).unwrap();

    // Nobody is signed in at boot.
    assert!(system.session.current().await.unwrap().is_none());

    // Wrong password and unknown user both fail the same way.
    let rejected = system.session.login("asmith", "password123").await;
    assert_eq!(rejected, Err(SessionError::InvalidCredentials));
    let rejected = system.session.login("ghost", "demo").await;
    assert_eq!(rejected, Err(SessionError::InvalidCredentials));

    // The demo credentials succeed and set the current session.
    let user = system.session.login("asmith", "demo").await.unwrap();
    assert_eq!(user.first_name, "Alex");
    let current = system.session.current().await.unwrap().unwrap();
    assert_eq!(current.username, "asmith");

    system.session.logout().await.unwrap();
    assert!(system.session.current().await.unwrap().is_none());

    // A toast shows up in the active queue and expires on its own.
    let id = system
        .notify
        .push_with_duration(ToastKind::Success, "Signed out", Duration::from_millis(10))
        .await
        .unwrap();
    let active = system.notify.active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, id);

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(system.notify.active().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}
