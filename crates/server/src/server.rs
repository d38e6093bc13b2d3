use axum::{
    Router,
    body::Body,
    extract::FromRequestParts,
    http::{HeaderName, Request, StatusCode, request::Parts},
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Error as AxumError, Header},
};

use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{health, transactions, wallets};
use engine::Engine;

static USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");
static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// `TypedHeader` for the caller identity.
///
/// Mutating requests must contain a non-empty "x-user-id" entry in the header.
#[derive(Debug)]
struct UserIdHeader(String);

impl Header for UserIdHeader {
    fn name() -> &'static HeaderName {
        &USER_ID_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, AxumError>
    where
        Self: Sized,
        I: Iterator<Item = &'i axum::http::HeaderValue>,
    {
        let value = values.next().ok_or_else(AxumError::invalid)?;
        let Ok(value) = value.to_str() else {
            return Err(AxumError::invalid());
        };
        let value = value.trim();
        if value.is_empty() {
            return Err(AxumError::invalid());
        }

        Ok(UserIdHeader(value.to_string()))
    }

    fn encode<E: Extend<axum::http::HeaderValue>>(&self, values: &mut E) {
        match axum::http::HeaderValue::from_str(&self.0) {
            Ok(value) => values.extend(std::iter::once(value)),
            Err(_) => tracing::error!("failed to encode x-user-id header"),
        }
    }
}

/// Identity of the user issuing a request.
///
/// Extracting it rejects the request with `401` when the header is missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caller(pub String);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(UserIdHeader(user_id)) =
            TypedHeader::<UserIdHeader>::from_request_parts(parts, state)
                .await
                .map_err(|_| StatusCode::UNAUTHORIZED)?;
        Ok(Caller(user_id))
    }
}

/// Builds the API router on top of `engine`.
pub fn router(engine: Arc<Engine>) -> Router {
    let state = ServerState { engine };

    let routes = Router::new()
        .route("/health", get(health::get))
        .route("/wallets", get(wallets::list).post(wallets::wallet_new))
        .route("/wallets/{wallet_id}", get(wallets::get))
        .route(
            "/wallets/{wallet_id}/transactions",
            get(transactions::list).post(transactions::transaction_new),
        )
        .route("/transactions/{tx_id}", get(transactions::get))
        .route("/transactions/{tx_id}/approve", post(transactions::approve))
        .with_state(state);

    with_middleware(routes)
}

/// Wraps `routes` with the request-scoped layers.
///
/// Every response carries an `x-request-id` (the caller's, or a fresh UUID),
/// each request is traced in a span holding that id, and a panicking handler
/// becomes a `500` instead of dropping the connection.
pub fn with_middleware(routes: Router) -> Router {
    // Outermost first: the id must exist before the trace span is opened.
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            REQUEST_ID_HEADER.clone(),
            MakeRequestUuid,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(&REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");

                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER.clone()))
        .layer(CatchPanicLayer::new());

    routes.layer(middleware)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(engine)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
