use crate::domain::entities::{AssetFilter, MediaAsset};
use crate::domain::errors::MediaLakeError;
use crate::domain::ports::MediaAssetStore;

// List use case with injected dependencies.
pub struct ListAssetsUseCase<S> {
    pub store: S,
}

impl<S> ListAssetsUseCase<S>
where
    S: MediaAssetStore,
{
    pub async fn execute(&self, filter: AssetFilter) -> Result<Vec<MediaAsset>, MediaLakeError> {
        self.store.list(&filter).await
    }
}
