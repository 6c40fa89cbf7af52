use crate::domain::entities::{DeleteCriteria, DeleteOutcome};
use crate::domain::errors::MediaLakeError;
use crate::domain::ports::MediaAssetStore;

// Delete use case with injected dependencies.
pub struct DeleteAssetUseCase<S> {
    pub store: S,
}

impl<S> DeleteAssetUseCase<S>
where
    S: MediaAssetStore,
{
    pub async fn execute(&self, criteria: DeleteCriteria) -> Result<(), MediaLakeError> {
        // An empty body would otherwise match every asset.
        if criteria.is_empty() {
            return Err(MediaLakeError::MissingCriteria);
        }

        match self.store.delete_one(&criteria).await? {
            DeleteOutcome::Deleted => Ok(()),
            DeleteOutcome::NotFound => Err(MediaLakeError::NotFound),
            DeleteOutcome::Ambiguous => Err(MediaLakeError::AmbiguousMatch),
        }
    }
}
