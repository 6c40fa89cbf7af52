use uuid::Uuid;

use crate::domain::entities::{AssetAttributes, MediaAsset, MediaPayload, ValidatedAttributes};
use crate::domain::errors::MediaLakeError;
use crate::domain::ports::{Clock, MediaAssetStore};
use crate::use_cases::attributes::validate_attributes;

// One item of a create request.
#[derive(Clone, Debug)]
pub struct NewAsset {
    pub attributes: AssetAttributes,
    pub media: Option<MediaPayload>,
}

// Create use case with injected dependencies.
pub struct CreateAssetsUseCase<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> CreateAssetsUseCase<C, S>
where
    C: Clock,
    S: MediaAssetStore,
{
    // Validate every item first so a bad item never leaves a partial batch.
    pub async fn execute(&self, items: Vec<NewAsset>) -> Result<Vec<MediaAsset>, MediaLakeError> {
        let now = self.clock.now();
        let mut assets = Vec::with_capacity(items.len());

        for item in items {
            if let Some(media) = &item.media {
                if !media.is_exclusive() {
                    return Err(MediaLakeError::InvalidMedia);
                }
            }
            let attributes = validate_attributes(item.attributes)?;
            assets.push(build_asset(attributes, item.media, now));
        }

        self.store.insert_all(assets.clone()).await?;

        Ok(assets)
    }
}

fn build_asset(
    attributes: ValidatedAttributes,
    media: Option<MediaPayload>,
    now: chrono::DateTime<chrono::Utc>,
) -> MediaAsset {
    // The request only carries an expiry, so it also stands in for the start.
    let (source_url, source_window) = match media.as_ref().and_then(|m| m.source_url()) {
        Some(url) => (
            Some(url.to_string()),
            media.as_ref().and_then(|m| m.source_url_valid_until),
        ),
        None => (None, None),
    };

    MediaAsset {
        id: Uuid::new_v4(),
        gtin: attributes.gtin,
        channel: attributes.channel,
        media_id: attributes.media_id,
        content_type: attributes.content_type,
        media_type: attributes.media_type,
        description: attributes.description,
        brand: attributes.brand,
        category: attributes.category,
        has_copyright: Some(attributes.has_copyright),
        media,
        status: attributes.status,
        resolution_key: attributes.resolution_key,
        resolution_in_px: attributes.resolution_in_px,
        size_in_bytes: None,
        license_valid_from: now,
        license_valid_until: now,
        source_url,
        source_url_valid_from: source_window,
        source_url_valid_until: source_window,
    }
}
