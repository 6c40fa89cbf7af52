use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{
    AssetFilter, DeleteCriteria, DeleteOutcome, MediaAsset, ValidatedAttributes,
};
use crate::domain::errors::MediaLakeError;
use crate::domain::ports::MediaAssetStore;

// In-memory asset store keyed by gtin, for local runs without PostgreSQL.
#[derive(Clone, Default)]
pub struct InMemoryMediaAssetStore {
    pub assets: Arc<Mutex<BTreeMap<String, MediaAsset>>>,
}

#[async_trait]
impl MediaAssetStore for InMemoryMediaAssetStore {
    async fn list(&self, filter: &AssetFilter) -> Result<Vec<MediaAsset>, MediaLakeError> {
        let assets = self.assets.lock().await;
        Ok(assets
            .values()
            .filter(|asset| filter.matches(asset))
            .cloned()
            .collect())
    }

    async fn insert_all(&self, batch: Vec<MediaAsset>) -> Result<(), MediaLakeError> {
        let mut assets = self.assets.lock().await;

        {
            let mut seen = HashSet::with_capacity(batch.len());
            for asset in &batch {
                if assets.contains_key(&asset.gtin) || !seen.insert(asset.gtin.as_str()) {
                    return Err(MediaLakeError::DuplicateGtin(asset.gtin.clone()));
                }
            }
        }

        for asset in batch {
            assets.insert(asset.gtin.clone(), asset);
        }
        Ok(())
    }

    async fn update_all(&self, updates: Vec<ValidatedAttributes>) -> Result<usize, MediaLakeError> {
        let mut assets = self.assets.lock().await;

        let mut updated = 0;
        for attributes in &updates {
            if let Some(asset) = assets.get_mut(&attributes.gtin) {
                asset.apply(attributes);
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn delete_one(&self, criteria: &DeleteCriteria) -> Result<DeleteOutcome, MediaLakeError> {
        let mut assets = self.assets.lock().await;

        let found: Vec<String> = assets
            .values()
            .filter(|asset| criteria.matches(asset))
            .map(|asset| asset.gtin.clone())
            .take(2)
            .collect();
        let outcome = match found.as_slice() {
            [] => DeleteOutcome::NotFound,
            [gtin] => {
                assets.remove(gtin);
                DeleteOutcome::Deleted
            }
            _ => DeleteOutcome::Ambiguous,
        };
        Ok(outcome)
    }
}
