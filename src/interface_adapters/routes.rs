use crate::interface_adapters::auth::require_api_key;
use crate::interface_adapters::handlers::{
    create_assets, delete_asset, health, list_assets, update_assets,
};
use crate::interface_adapters::state::AppState;
use axum::{middleware, routing::get, Router};

pub fn app(state: AppState) -> Router {
    let media = get(list_assets)
        .post(create_assets)
        .patch(update_assets)
        .delete(delete_asset);

    // The key check only runs for matched media routes.
    let protected = Router::new()
        .route("/media", media.clone())
        .route("/media/", media)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(protected)
        .with_state(state)
}
