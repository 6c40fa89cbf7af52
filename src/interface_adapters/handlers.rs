use crate::domain::errors::{AuthError, MediaLakeError};
use crate::interface_adapters::protocol::{
    DeleteMediaAssetRequest, ErrorResponse, HealthResponse, MediaAssetBody, MediaAssetQuery,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::create_assets::CreateAssetsUseCase;
use crate::use_cases::delete_asset::DeleteAssetUseCase;
use crate::use_cases::list_assets::ListAssetsUseCase;
use crate::use_cases::update_assets::UpdateAssetsUseCase;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::{info, warn};

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// Handler for listing assets matching the query parameters.
#[tracing::instrument(name = "list_assets", skip_all, fields(filter = ?query))]
pub async fn list_assets(
    State(state): State<AppState>,
    Query(query): Query<MediaAssetQuery>,
) -> Result<Json<Vec<MediaAssetBody>>, ApiError> {
    let use_case = ListAssetsUseCase {
        store: state.store.clone(),
    };

    let assets = use_case.execute(query.into()).await.map_err(map_media_error)?;

    Ok(Json(assets.into_iter().map(MediaAssetBody::from).collect()))
}

// Handler for creating a batch of assets.
#[tracing::instrument(name = "create_assets", skip_all, fields(batch = body.len()))]
pub async fn create_assets(
    State(state): State<AppState>,
    Json(body): Json<Vec<MediaAssetBody>>,
) -> Result<(StatusCode, Json<Vec<MediaAssetBody>>), ApiError> {
    let use_case = CreateAssetsUseCase {
        clock: SystemClock,
        store: state.store.clone(),
    };

    let created = use_case
        .execute(body.iter().map(MediaAssetBody::new_asset).collect())
        .await
        .map_err(map_media_error)?;
    info!(created = created.len(), "media assets created");

    Ok((StatusCode::ACCEPTED, Json(body)))
}

// Handler for updating a batch of assets by gtin.
#[tracing::instrument(name = "update_assets", skip_all, fields(batch = body.len()))]
pub async fn update_assets(
    State(state): State<AppState>,
    Json(body): Json<Vec<MediaAssetBody>>,
) -> Result<(StatusCode, Json<Vec<MediaAssetBody>>), ApiError> {
    let use_case = UpdateAssetsUseCase {
        store: state.store.clone(),
    };

    let result = use_case
        .execute(body.iter().map(MediaAssetBody::attributes).collect())
        .await
        .map_err(map_media_error)?;
    if result.updated < result.requested {
        info!(
            requested = result.requested,
            updated = result.updated,
            "unknown gtins skipped"
        );
    }

    Ok((StatusCode::ACCEPTED, Json(body)))
}

// Handler for deleting the single asset matching the request body.
#[tracing::instrument(name = "delete_asset", skip_all, fields(gtin = ?body.gtin))]
pub async fn delete_asset(
    State(state): State<AppState>,
    Json(body): Json<DeleteMediaAssetRequest>,
) -> Result<Json<Value>, ApiError> {
    let use_case = DeleteAssetUseCase {
        store: state.store.clone(),
    };

    use_case
        .execute(body.into())
        .await
        .map_err(map_media_error)?;

    Ok(Json(Value::Null))
}

// Helper to build a JSON error response.
pub(crate) fn error_response(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}

fn map_media_error(err: MediaLakeError) -> ApiError {
    let status = match &err {
        MediaLakeError::InvalidMedia => StatusCode::UNPROCESSABLE_ENTITY,
        MediaLakeError::InvalidAsset(_)
        | MediaLakeError::DuplicateGtin(_)
        | MediaLakeError::MissingCriteria => StatusCode::BAD_REQUEST,
        MediaLakeError::NotFound => StatusCode::NOT_FOUND,
        MediaLakeError::AmbiguousMatch => StatusCode::CONFLICT,
        MediaLakeError::StorageFailure => StatusCode::BAD_GATEWAY,
    };
    if status.is_server_error() {
        warn!(error = %err, "media request failed");
    }
    error_response(status, err.to_string())
}

pub(crate) fn map_auth_error(err: AuthError) -> ApiError {
    let status = match err {
        AuthError::MissingApiKey => StatusCode::FORBIDDEN,
        AuthError::InvalidApiKey => StatusCode::UNAUTHORIZED,
    };
    error_response(status, err.to_string())
}
