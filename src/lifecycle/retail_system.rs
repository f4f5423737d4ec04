use tracing::{error, info};

use crate::clients::{CatalogAccess, OrdersClient, ProductsClient, StoresClient};
use crate::fixtures::FixtureSet;
use crate::framework::FrameworkError;
use crate::model::OrderSummary;
use crate::notify::{NotifyActor, NotifyClient};
use crate::order_catalog::OrderCatalogError;
use crate::query;
use crate::session::{SessionActor, SessionClient};
use crate::{order_catalog, product_catalog, store_catalog};

/// The main runtime orchestrator for the retail system.
///
/// `RetailSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Connecting clients that depend on each other
///   (the orders client resolves product joins through the products client)
/// - **Cross-catalog reads**: The dashboard summary spans two catalogs, so it
///   lives here rather than on either client
///
/// # Architecture
///
/// The system consists of five actors:
/// - **Product catalog**: Serves the product collection
/// - **Order catalog**: Serves the order collection, most-recent-first
/// - **Store catalog**: Serves the store directory
/// - **Session service**: Mock sign-in over the fixture user directory
/// - **Notification service**: The auto-expiring toast queue
///
/// # Example
///
/// ```ignore
/// let system = RetailSystem::start(FixtureSet::bundled()?)?;
///
/// let user = system.session.login("asmith", "demo").await?;
/// let summary = system.summary().await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct RetailSystem {
    /// Client for the product catalog actor
    pub products: ProductsClient,

    /// Client for the order catalog actor
    pub orders: OrdersClient,

    /// Client for the store catalog actor
    pub stores: StoresClient,

    /// Client for the session actor
    pub session: SessionClient,

    /// Client for the notification actor
    pub notify: NotifyClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RetailSystem {
    /// Seeds and starts every actor from the given fixture set.
    ///
    /// Fails if a catalog's seed data violates the unique-key contract.
    pub fn start(fixtures: FixtureSet) -> Result<Self, FrameworkError> {
        // 1. Seed catalogs. The orders client depends on the products client,
        //    so products come first.
        let (product_actor, products) = product_catalog::new(fixtures.products)?;
        let (order_actor, orders) = order_catalog::new(fixtures.orders, products.clone())?;
        let (store_actor, stores) = store_catalog::new(fixtures.stores)?;

        // 2. The two stateful services.
        let (session_actor, session) = SessionActor::new(fixtures.users);
        let (notify_actor, notify) = NotifyActor::new();

        // 3. Spawn each actor in its own task.
        let handles = vec![
            tokio::spawn(product_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(store_actor.run()),
            tokio::spawn(session_actor.run()),
            tokio::spawn(notify_actor.run()),
        ];

        Ok(Self {
            products,
            orders,
            stores,
            session,
            notify,
            handles,
        })
    }

    /// The dashboard aggregate across the order and product catalogs.
    pub async fn summary(&self) -> Result<OrderSummary, OrderCatalogError> {
        let orders = self.orders.list(Default::default()).await?;
        let products = self
            .products
            .list(Default::default())
            .await
            .map_err(|e| OrderCatalogError::CatalogCommunicationError(e.to_string()))?;
        Ok(query::summarize(&orders, &products))
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each actor detects the
    /// closed channel and exits its event loop. Returns an error if any
    /// actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.products);
        drop(self.orders);
        drop(self.stores);
        drop(self.session);
        drop(self.notify);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
