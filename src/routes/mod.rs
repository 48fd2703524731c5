use axum::{
    Router,
    http::{HeaderValue, header},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::{errors, states::AppState};

pub mod health;
pub mod posts;

const ALLOWED_HEADERS: &str = "Content-Type,Authorization";
const COLLECTION_METHODS: &str = "GET,POST,OPTIONS";
const ITEM_METHODS: &str = "GET,PUT,DELETE,OPTIONS";

/// Attach the fixed cross-origin header set to every response of a resource
/// sub-router. Error responses and extractor rejections must carry these
/// headers too, which is why this overrides on the way out instead of relying
/// on preflight-only CORS grants.
fn with_cross_origin(router: Router<AppState>, methods: &'static str) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(ALLOWED_HEADERS),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(methods),
            )),
    )
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let collection = with_cross_origin(
        Router::new().route(
            "/posts",
            get(posts::list_posts)
                .post(posts::create_post)
                .options(posts::preflight),
        ),
        COLLECTION_METHODS,
    );

    let item = with_cross_origin(
        Router::new().route(
            "/posts/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post)
                .options(posts::preflight),
        ),
        ITEM_METHODS,
    );

    Router::new()
        .merge(collection)
        .merge(item)
        .route("/health", get(health::health_check))
        .layer(CatchPanicLayer::custom(errors::handle_panic))
        // Wildcard origin on everything else too (health, unmatched paths,
        // and the panic fallback above)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
