use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::{
    AssetFilter, DeleteCriteria, DeleteOutcome, MediaAsset, ValidatedAttributes,
};
use crate::domain::errors::MediaLakeError;

// Port for media asset persistence used by the use cases.
#[async_trait]
pub trait MediaAssetStore: Send + Sync {
    // Assets matching every set filter field, ordered by gtin.
    async fn list(&self, filter: &AssetFilter) -> Result<Vec<MediaAsset>, MediaLakeError>;

    // Store the whole batch or nothing.
    async fn insert_all(&self, assets: Vec<MediaAsset>) -> Result<(), MediaLakeError>;

    // Overwrite assets by gtin, skipping unknown ones. Returns the number updated.
    async fn update_all(&self, updates: Vec<ValidatedAttributes>) -> Result<usize, MediaLakeError>;

    // Delete the single asset matching the criteria.
    async fn delete_one(&self, criteria: &DeleteCriteria) -> Result<DeleteOutcome, MediaLakeError>;
}

#[async_trait]
impl<T> MediaAssetStore for Arc<T>
where
    T: MediaAssetStore + ?Sized,
{
    async fn list(&self, filter: &AssetFilter) -> Result<Vec<MediaAsset>, MediaLakeError> {
        (**self).list(filter).await
    }

    async fn insert_all(&self, assets: Vec<MediaAsset>) -> Result<(), MediaLakeError> {
        (**self).insert_all(assets).await
    }

    async fn update_all(&self, updates: Vec<ValidatedAttributes>) -> Result<usize, MediaLakeError> {
        (**self).update_all(updates).await
    }

    async fn delete_one(&self, criteria: &DeleteCriteria) -> Result<DeleteOutcome, MediaLakeError> {
        (**self).delete_one(criteria).await
    }
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
