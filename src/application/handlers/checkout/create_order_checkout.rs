//! CreateOrderCheckoutHandler - Command handler for initiating an order checkout.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OrderId, ProductId};
use crate::domain::orders::{Order, OrderItem};
use crate::ports::{
    CheckoutLineItem, CheckoutSession, CreateSessionRequest, OrderStore, PaymentProvider,
    ProductRepository,
};

/// A requested order line: which product and how many.
#[derive(Debug, Clone)]
pub struct OrderItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Command to start an order checkout.
#[derive(Debug, Clone)]
pub struct CreateOrderCheckoutCommand {
    pub items: Vec<OrderItemRequest>,
}

/// Result of successful checkout initiation.
#[derive(Debug, Clone)]
pub struct CreateOrderCheckoutResult {
    pub order: Order,
    pub checkout_session: CheckoutSession,
}

/// Handler for initiating order checkout.
///
/// Titles and prices are read from the catalog, never from the client,
/// and snapshotted onto the order. The order is persisted as `pending`
/// before the session is created so the completion webhook always finds
/// its row. Settlement happens exclusively via webhook.
pub struct CreateOrderCheckoutHandler {
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderStore>,
    payment_provider: Arc<dyn PaymentProvider>,
    frontend_url: String,
}

impl CreateOrderCheckoutHandler {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderStore>,
        payment_provider: Arc<dyn PaymentProvider>,
        frontend_url: String,
    ) -> Self {
        Self {
            products,
            orders,
            payment_provider,
            frontend_url,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateOrderCheckoutCommand,
    ) -> Result<CreateOrderCheckoutResult, DomainError> {
        // 1. Reject empty carts before any lookups
        if cmd.items.is_empty() {
            return Err(DomainError::validation(
                "items",
                "Order must contain at least one item",
            ));
        }

        // 2. Resolve each line against the catalog, snapshotting title
        //    and price at this moment
        let mut order_items = Vec::with_capacity(cmd.items.len());
        for item in &cmd.items {
            let product = self
                .products
                .find_by_id(&item.product_id)
                .await?
                .ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::ProductNotFound,
                        format!("Product not found: {}", item.product_id),
                    )
                })?;

            order_items.push(OrderItem::new(
                product.id,
                product.title,
                product.price_cents,
                item.quantity,
            )?);
        }

        // 3. Create the pending order
        let order = Order::create(OrderId::new(), order_items)?;

        // 4. Persist before talking to the provider, so the webhook can
        //    always resolve metadata.orderId
        self.orders.save(&order).await?;

        // 5. Create the hosted checkout session
        let checkout_session = self
            .payment_provider
            .create_checkout_session(CreateSessionRequest {
                line_items: order
                    .items
                    .iter()
                    .map(|i| CheckoutLineItem {
                        name: i.title.clone(),
                        unit_amount_cents: i.unit_price_cents,
                        quantity: i.quantity,
                    })
                    .collect(),
                metadata: vec![("orderId".to_string(), order.id.to_string())],
                success_url: format!("{}?checkout=success", self.frontend_url),
                cancel_url: format!("{}?checkout=cancel", self.frontend_url),
            })
            .await?;

        Ok(CreateOrderCheckoutResult {
            order,
            checkout_session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Product;
    use crate::domain::orders::OrderStatus;
    use crate::domain::payments::{StripeEvent, WebhookError};
    use crate::ports::{PaymentError, PaymentErrorCode};
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockProductRepository {
        products: Mutex<Vec<Product>>,
    }

    impl MockProductRepository {
        fn with_products(products: Vec<Product>) -> Self {
            Self {
                products: Mutex::new(products),
            }
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn save(&self, _product: &Product) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _product: &Product) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
            Ok(self
                .products
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == *id)
                .cloned())
        }

        async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
            Ok(vec![])
        }

        async fn delete(&self, _id: &ProductId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct MockOrderStore {
        saved: Mutex<Vec<Order>>,
    }

    impl MockOrderStore {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
            }
        }

        fn saved_orders(&self) -> Vec<Order> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl OrderStore for MockOrderStore {
        async fn save(&self, order: &Order) -> Result<(), DomainError> {
            self.saved.lock().unwrap().push(order.clone());
            Ok(())
        }

        async fn find_by_id(&self, _id: &OrderId) -> Result<Option<Order>, DomainError> {
            Ok(None)
        }

        async fn transition_status(
            &self,
            _id: &OrderId,
            _from: OrderStatus,
            _to: OrderStatus,
        ) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    struct MockPaymentProvider {
        fail_create: bool,
        requests: Mutex<Vec<CreateSessionRequest>>,
    }

    impl MockPaymentProvider {
        fn new() -> Self {
            Self {
                fail_create: false,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail_create: true,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<CreateSessionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentProvider for MockPaymentProvider {
        async fn create_checkout_session(
            &self,
            request: CreateSessionRequest,
        ) -> Result<CheckoutSession, PaymentError> {
            if self.fail_create {
                return Err(PaymentError::new(
                    PaymentErrorCode::ProviderError,
                    "Session creation failed",
                ));
            }
            self.requests.lock().unwrap().push(request);
            Ok(CheckoutSession {
                id: "cs_test_123".to_string(),
                url: "https://checkout.stripe.com/c/pay/cs_test_123".to_string(),
                expires_at: None,
            })
        }

        async fn verify_webhook(
            &self,
            _payload: &[u8],
            _signature: Option<&str>,
        ) -> Result<StripeEvent, WebhookError> {
            Err(WebhookError::ParseError("not used".to_string()))
        }
    }

    fn catalog() -> (Product, Product) {
        let mug = Product::create(ProductId::new(), "Ceramic mug", None, 1800, 25, None).unwrap();
        let tote = Product::create(ProductId::new(), "Linen tote", None, 2400, 10, None).unwrap();
        (mug, tote)
    }

    fn handler_with(
        products: Arc<MockProductRepository>,
        orders: Arc<MockOrderStore>,
        provider: Arc<MockPaymentProvider>,
    ) -> CreateOrderCheckoutHandler {
        CreateOrderCheckoutHandler::new(
            products,
            orders,
            provider,
            "https://shop.example.com".to_string(),
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn creates_pending_order_and_session() {
        let (mug, tote) = catalog();
        let mug_id = mug.id;
        let tote_id = tote.id;
        let products = Arc::new(MockProductRepository::with_products(vec![mug, tote]));
        let orders = Arc::new(MockOrderStore::new());
        let provider = Arc::new(MockPaymentProvider::new());
        let handler = handler_with(products, orders.clone(), provider.clone());

        let cmd = CreateOrderCheckoutCommand {
            items: vec![
                OrderItemRequest {
                    product_id: mug_id,
                    quantity: 2,
                },
                OrderItemRequest {
                    product_id: tote_id,
                    quantity: 1,
                },
            ],
        };
        let result = handler.handle(cmd).await.unwrap();

        // Total from catalog prices: 2 * 1800 + 1 * 2400
        assert_eq!(result.order.total_cents, 6000);
        assert_eq!(result.order.status, OrderStatus::Pending);
        assert_eq!(result.checkout_session.id, "cs_test_123");

        let saved = orders.saved_orders();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, result.order.id);
    }

    #[tokio::test]
    async fn session_request_carries_order_metadata_and_urls() {
        let (mug, _) = catalog();
        let mug_id = mug.id;
        let products = Arc::new(MockProductRepository::with_products(vec![mug]));
        let provider = Arc::new(MockPaymentProvider::new());
        let handler = handler_with(products, Arc::new(MockOrderStore::new()), provider.clone());

        let cmd = CreateOrderCheckoutCommand {
            items: vec![OrderItemRequest {
                product_id: mug_id,
                quantity: 1,
            }],
        };
        let result = handler.handle(cmd).await.unwrap();

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(
            request.metadata,
            vec![("orderId".to_string(), result.order.id.to_string())]
        );
        assert_eq!(
            request.success_url,
            "https://shop.example.com?checkout=success"
        );
        assert_eq!(
            request.cancel_url,
            "https://shop.example.com?checkout=cancel"
        );
        assert_eq!(request.line_items.len(), 1);
        assert_eq!(request.line_items[0].name, "Ceramic mug");
        assert_eq!(request.line_items[0].unit_amount_cents, 1800);
    }

    #[tokio::test]
    async fn rejects_empty_cart() {
        let products = Arc::new(MockProductRepository::with_products(vec![]));
        let handler = handler_with(
            products,
            Arc::new(MockOrderStore::new()),
            Arc::new(MockPaymentProvider::new()),
        );

        let result = handler
            .handle(CreateOrderCheckoutCommand { items: vec![] })
            .await;

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn rejects_zero_quantity() {
        let (mug, _) = catalog();
        let mug_id = mug.id;
        let products = Arc::new(MockProductRepository::with_products(vec![mug]));
        let handler = handler_with(
            products,
            Arc::new(MockOrderStore::new()),
            Arc::new(MockPaymentProvider::new()),
        );

        let cmd = CreateOrderCheckoutCommand {
            items: vec![OrderItemRequest {
                product_id: mug_id,
                quantity: 0,
            }],
        };
        let result = handler.handle(cmd).await;

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code, ErrorCode::OutOfRange);
    }

    #[tokio::test]
    async fn rejects_unknown_product_without_saving() {
        let orders = Arc::new(MockOrderStore::new());
        let handler = handler_with(
            Arc::new(MockProductRepository::with_products(vec![])),
            orders.clone(),
            Arc::new(MockPaymentProvider::new()),
        );

        let cmd = CreateOrderCheckoutCommand {
            items: vec![OrderItemRequest {
                product_id: ProductId::new(),
                quantity: 1,
            }],
        };
        let result = handler.handle(cmd).await;

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code, ErrorCode::ProductNotFound);
        assert!(orders.saved_orders().is_empty());
    }

    #[tokio::test]
    async fn order_remains_pending_when_provider_fails() {
        let (mug, _) = catalog();
        let mug_id = mug.id;
        let orders = Arc::new(MockOrderStore::new());
        let handler = handler_with(
            Arc::new(MockProductRepository::with_products(vec![mug])),
            orders.clone(),
            Arc::new(MockPaymentProvider::failing()),
        );

        let cmd = CreateOrderCheckoutCommand {
            items: vec![OrderItemRequest {
                product_id: mug_id,
                quantity: 1,
            }],
        };
        let result = handler.handle(cmd).await;

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code, ErrorCode::PaymentProviderError);
        // The pending row stays; no session references it, so it simply
        // never settles
        assert_eq!(orders.saved_orders().len(), 1);
        assert_eq!(orders.saved_orders()[0].status, OrderStatus::Pending);
    }
}
