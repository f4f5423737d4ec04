//! Demo entry point: boots the retail system from the bundled fixtures and
//! walks the main flows - sign in, dashboard summary, a filtered order
//! listing with its product join, and a toast.

use stockroom::clients::CatalogAccess;
use stockroom::fixtures::FixtureSet;
use stockroom::lifecycle::{setup_tracing, RetailSystem};
use stockroom::model::OrderStatus;
use stockroom::notify::ToastKind;
use stockroom::query::{badge_for, OrderCriteria, StatusFilter};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting stockroom demo");

    let fixtures = FixtureSet::bundled().map_err(|e| e.to_string())?;
    let system = RetailSystem::start(fixtures).map_err(|e| e.to_string())?;

    // Sign in through the mock session service
    let span = tracing::info_span!("sign_in");
    let user = async {
        info!("Signing in demo user");
        system
            .session
            .login("asmith", "demo")
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(username = %user.username, store = %user.store_number, "Signed in");

    // Dashboard
    let summary = system.summary().await.map_err(|e| e.to_string())?;
    info!(
        total_orders = summary.total_orders,
        processing = summary.processing_orders,
        available = summary.available_orders,
        inventory = summary.total_inventory,
        "Dashboard summary"
    );

    let recent = system.orders.recent(5).await.map_err(|e| e.to_string())?;
    for order in &recent {
        let badge = badge_for(order.order_status);
        info!(order = %order.order_number, status = badge.label, "Recent order");
    }

    // Filtered order listing plus the product join for the first hit
    let span = tracing::info_span!("order_browse");
    async {
        let criteria = OrderCriteria::new("", StatusFilter::Only(OrderStatus::Processing));
        let processing = system
            .orders
            .list(criteria)
            .await
            .map_err(|e| e.to_string())?;
        info!(hits = processing.len(), "Processing orders");

        if let Some(order) = processing.first() {
            match system
                .orders
                .order_with_product(order.order_number.clone())
                .await
            {
                Ok(Some(view)) => {
                    let product = view
                        .product
                        .as_ref()
                        .map(|p| p.title.as_str())
                        .unwrap_or("<retired item>");
                    info!(order = %view.order.order_number, product, "Order detail");
                }
                Ok(None) => info!("Order not found"),
                Err(e) => error!(error = %e, "Order detail failed"),
            }
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system
        .notify
        .push(ToastKind::Success, "Order list refreshed")
        .await
        .map_err(|e| e.to_string())?;

    system.session.logout().await.map_err(|e| e.to_string())?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
