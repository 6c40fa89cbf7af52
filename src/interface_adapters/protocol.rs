use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    AssetAttributes, AssetFilter, AssetStatus, ContentType, DeleteCriteria, MediaAsset,
    MediaPayload, MediaType, ResolutionKey,
};
use crate::use_cases::create_assets::NewAsset;

// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAssetQuery {
    pub gtin: Option<String>,
    pub channel: Option<String>,
    pub media_id: Option<String>,
    pub content_type: Option<ContentType>,
    pub media_type: Option<MediaType>,
    pub resolution_key: Option<ResolutionKey>,
}

impl From<MediaAssetQuery> for AssetFilter {
    fn from(query: MediaAssetQuery) -> Self {
        AssetFilter {
            gtin: query.gtin,
            channel: query.channel,
            media_id: query.media_id,
            content_type: query.content_type,
            media_type: query.media_type,
            resolution_key: query.resolution_key,
        }
    }
}

// Asset payload used for create and update requests and every asset response.
// `media` is only read on create and never echoed back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAssetBody {
    pub gtin: String,
    pub channel: String,
    pub media_id: String,
    pub content_type: ContentType,
    pub media_type: Option<MediaType>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub status: Option<AssetStatus>,
    pub resolution_key: Option<ResolutionKey>,
    pub resolution_in_px: Option<String>,
    pub has_copyright: bool,
    #[serde(default, skip_serializing)]
    pub media: Option<MediaPayload>,
}

impl MediaAssetBody {
    pub fn attributes(&self) -> AssetAttributes {
        AssetAttributes {
            gtin: self.gtin.clone(),
            channel: self.channel.clone(),
            media_id: self.media_id.clone(),
            content_type: self.content_type,
            media_type: self.media_type,
            description: self.description.clone(),
            brand: self.brand.clone(),
            category: self.category.clone(),
            status: self.status,
            resolution_key: self.resolution_key,
            resolution_in_px: self.resolution_in_px.clone(),
            has_copyright: self.has_copyright,
        }
    }

    pub fn new_asset(&self) -> NewAsset {
        NewAsset {
            attributes: self.attributes(),
            media: self.media.clone(),
        }
    }
}

impl From<MediaAsset> for MediaAssetBody {
    fn from(asset: MediaAsset) -> Self {
        MediaAssetBody {
            gtin: asset.gtin,
            channel: asset.channel,
            media_id: asset.media_id,
            content_type: asset.content_type,
            media_type: asset.media_type,
            description: asset.description,
            brand: asset.brand,
            category: asset.category,
            status: Some(asset.status),
            resolution_key: Some(asset.resolution_key),
            resolution_in_px: Some(asset.resolution_in_px),
            has_copyright: asset.has_copyright.unwrap_or(false),
            media: None,
        }
    }
}

// Request payload for deleting a single asset.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMediaAssetRequest {
    pub channel: Option<String>,
    pub gtin: Option<String>,
    pub media_id: Option<String>,
    pub content_type: Option<ContentType>,
}

impl From<DeleteMediaAssetRequest> for DeleteCriteria {
    fn from(request: DeleteMediaAssetRequest) -> Self {
        DeleteCriteria {
            channel: request.channel,
            gtin: request.gtin,
            media_id: request.media_id,
            content_type: request.content_type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
