use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{
    AssetAttributes, AssetFilter, AssetStatus, ContentType, DeleteCriteria, DeleteOutcome,
    MediaAsset, MediaType, ResolutionKey, ValidatedAttributes,
};
use crate::domain::errors::MediaLakeError;
use crate::domain::ports::{Clock, MediaAssetStore};
use crate::interface_adapters::stores::memory::InMemoryMediaAssetStore;

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at_epoch(seconds: i64) -> Self {
        Self(
            Utc.timestamp_opt(seconds, 0)
                .single()
                .expect("valid test timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub(crate) fn sample_attributes(gtin: &str) -> AssetAttributes {
    AssetAttributes {
        gtin: gtin.to_string(),
        channel: "web".to_string(),
        media_id: format!("media-{gtin}"),
        content_type: ContentType::Png,
        media_type: Some(MediaType::MainImage),
        description: None,
        brand: Some("Acme".to_string()),
        category: None,
        status: Some(AssetStatus::New),
        resolution_key: Some(ResolutionKey::Original),
        resolution_in_px: Some("4000x4000".to_string()),
        has_copyright: false,
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub list: bool,
    pub insert: bool,
    pub update: bool,
    pub delete: bool,
}

// In-memory store with switchable infrastructure failures.
#[derive(Clone, Default)]
pub(crate) struct FlakyStore {
    pub(crate) inner: InMemoryMediaAssetStore,
    failures: FailureFlags,
}

impl FlakyStore {
    pub(crate) fn failing(failures: FailureFlags) -> Self {
        Self {
            inner: InMemoryMediaAssetStore::default(),
            failures,
        }
    }
}

#[async_trait]
impl MediaAssetStore for FlakyStore {
    async fn list(&self, filter: &AssetFilter) -> Result<Vec<MediaAsset>, MediaLakeError> {
        if self.failures.list {
            return Err(MediaLakeError::StorageFailure);
        }
        self.inner.list(filter).await
    }

    async fn insert_all(&self, assets: Vec<MediaAsset>) -> Result<(), MediaLakeError> {
        if self.failures.insert {
            return Err(MediaLakeError::StorageFailure);
        }
        self.inner.insert_all(assets).await
    }

    async fn update_all(&self, updates: Vec<ValidatedAttributes>) -> Result<usize, MediaLakeError> {
        if self.failures.update {
            return Err(MediaLakeError::StorageFailure);
        }
        self.inner.update_all(updates).await
    }

    async fn delete_one(&self, criteria: &DeleteCriteria) -> Result<DeleteOutcome, MediaLakeError> {
        if self.failures.delete {
            return Err(MediaLakeError::StorageFailure);
        }
        self.inner.delete_one(criteria).await
    }
}
