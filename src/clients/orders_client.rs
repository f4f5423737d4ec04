use crate::clients::traits::CatalogAccess;
use crate::framework::{CatalogClient, FrameworkError};
use crate::model::{Order, Product};
use crate::order_catalog::{OrderCatalogError, OrderQuery, OrderQueryResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// An order resolved together with its best-effort product join.
///
/// `product` is `None` when the order references a retired item number; the
/// detail view renders without the product panel in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub order: Order,
    pub product: Option<Product>,
}

/// Client for interacting with the order catalog actor.
///
/// Carries a [`ProductsClient`](crate::clients::ProductsClient) so the
/// order-to-product join resolves through the product catalog rather than a
/// second copy of the product data.
#[derive(Clone)]
pub struct OrdersClient {
    inner: CatalogClient<Order>,
    products: crate::clients::ProductsClient,
}

impl OrdersClient {
    pub fn new(inner: CatalogClient<Order>, products: crate::clients::ProductsClient) -> Self {
        Self { inner, products }
    }

    /// The `n` most recently created orders.
    #[instrument(skip(self))]
    pub async fn recent(&self, n: usize) -> Result<Vec<Order>, OrderCatalogError> {
        debug!("Sending request");
        let result = self
            .inner
            .query(OrderQuery::Recent(n))
            .await
            .map_err(|e| OrderCatalogError::CatalogCommunicationError(e.to_string()))?;
        match result {
            OrderQueryResult::Recent(orders) => Ok(orders),
        }
    }

    /// Fetches an order and resolves its product join.
    ///
    /// A missing order is `Ok(None)`; a missing product is a valid,
    /// product-less view.
    #[instrument(skip(self))]
    pub async fn order_with_product(
        &self,
        order_number: String,
    ) -> Result<Option<OrderView>, OrderCatalogError> {
        debug!("Sending request");
        let Some(order) = self.inner.get(order_number).await.map_err(Self::map_error)? else {
            return Ok(None);
        };

        let product = self
            .products
            .get(order.item_number.clone())
            .await
            .map_err(|e| OrderCatalogError::CatalogCommunicationError(e.to_string()))?;

        Ok(Some(OrderView { order, product }))
    }
}

#[async_trait]
impl CatalogAccess<Order> for OrdersClient {
    type Error = OrderCatalogError;

    fn inner(&self) -> &CatalogClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderCatalogError::CatalogCommunicationError(e.to_string())
    }
}
