use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    bonus::bonus, health::health_check, spend::spend, topup::topup,
    wallet_balance::wallet_balance, wallet_meta::wallet_meta,
};
use axum::routing::{get, post};
use axum::Router;
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use walletd_core::AppState;

pub fn create_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(state.config.rate_limit_per_second)
            .burst_size(state.config.rate_limit_burst)
            .finish()
            .unwrap(),
    );

    let mut router = Router::new()
        .route("/wallets/{wallet_id}/topup", post(topup))
        .route("/wallets/{wallet_id}/spend", post(spend))
        .route("/wallets/{wallet_id}/bonus", post(bonus))
        .route("/wallets/{wallet_id}/balance", get(wallet_balance))
        .route("/wallets/{wallet_id}", get(wallet_meta))
        .route("/health", get(health_check))
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(axum::extract::DefaultBodyLimit::max(100 * 1024))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        )
        .layer(metric_layer);

    // rate limiting stays off in the test environment
    if !state.config.is_test() {
        router = router.layer(GovernorLayer {
            config: governor_conf,
        });
    }

    router.with_state(state)
}
