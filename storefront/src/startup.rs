use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Settings;
use crate::handlers::{
    app, auth, invoices, payments, products, purchases, quotations, sections,
};
use crate::middleware::auth::require_login;
use crate::services::backend::Backend;
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    // Session setup
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)));

    let protected = Router::new()
        .route("/", get(app::index))
        .route("/sections", get(sections::picker).post(sections::select))
        // Inventory
        .route("/products", get(products::list_page).post(products::create))
        .route("/products/new", get(products::new_page))
        .route("/products/:id/edit", get(products::edit_page))
        .route("/products/:id", post(products::update))
        .route("/products/:id/delete", post(products::delete))
        .route("/products/:id/stock", post(products::adjust_stock))
        // Purchases
        .route("/purchases", get(purchases::list_page).post(purchases::submit))
        .route("/purchases/new", get(purchases::new_page))
        .route("/purchases/discard", post(purchases::discard))
        .route("/purchases/items", post(purchases::save_item))
        .route("/purchases/items/:index/edit", post(purchases::edit_item))
        .route("/purchases/items/:index/delete", post(purchases::delete_item))
        .route("/purchases/:id/delete", post(purchases::delete))
        .route(
            "/purchases/:id/due",
            get(payments::purchase_due_page).post(payments::settle_purchase),
        )
        // Quotations
        .route(
            "/quotations",
            get(quotations::list_page).post(quotations::submit),
        )
        .route("/quotations/new", get(quotations::new_page))
        .route("/quotations/discard", post(quotations::discard))
        .route("/quotations/items", post(quotations::save_item))
        .route("/quotations/items/:index/edit", post(quotations::edit_item))
        .route(
            "/quotations/items/:index/delete",
            post(quotations::delete_item),
        )
        .route("/quotations/:id/edit", get(quotations::edit_page))
        .route("/quotations/:id/delete", post(quotations::delete))
        // Invoices
        .route("/invoices", get(invoices::list_page).post(invoices::submit))
        .route("/invoices/new", get(invoices::new_page))
        .route("/invoices/discard", post(invoices::discard))
        .route("/invoices/items", post(invoices::save_item))
        .route("/invoices/items/:index/edit", post(invoices::edit_item))
        .route("/invoices/items/:index/delete", post(invoices::delete_item))
        .route("/invoices/:id", get(invoices::detail_page))
        .route("/invoices/:id/delete", post(invoices::delete))
        .route(
            "/invoices/:id/due",
            get(payments::invoice_due_page).post(payments::settle_invoice),
        )
        // Due-payment preview
        .route("/payments/remaining", post(payments::remaining_fragment))
        .route_layer(from_fn(require_login));

    Router::new()
        .route("/health", get(app::health_check))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", get(auth::logout))
        .merge(protected)
        .layer(session_layer)
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Port 0 binds a random free port, which the test harness relies on.
    pub async fn build(settings: Settings) -> anyhow::Result<Self> {
        let backend = Backend::new(settings.backend.clone())?;
        let state = AppState::new(backend);
        let router = build_router(state);

        let address = format!("{}:{}", settings.server.host, settings.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            anyhow::anyhow!("Failed to bind to address {address}: {e}")
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }
}
