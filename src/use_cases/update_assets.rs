use crate::domain::entities::AssetAttributes;
use crate::domain::errors::MediaLakeError;
use crate::domain::ports::MediaAssetStore;
use crate::use_cases::attributes::validate_attributes;

// Response returned by the update use case.
#[derive(Debug, PartialEq, Eq)]
pub struct UpdateAssetsResponse {
    pub requested: usize,
    pub updated: usize,
}

// Update use case with injected dependencies.
pub struct UpdateAssetsUseCase<S> {
    pub store: S,
}

impl<S> UpdateAssetsUseCase<S>
where
    S: MediaAssetStore,
{
    pub async fn execute(
        &self,
        items: Vec<AssetAttributes>,
    ) -> Result<UpdateAssetsResponse, MediaLakeError> {
        let requested = items.len();
        let updates = items
            .into_iter()
            .map(validate_attributes)
            .collect::<Result<Vec<_>, _>>()?;

        let updated = self.store.update_all(updates).await?;

        Ok(UpdateAssetsResponse { requested, updated })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AssetFilter, AssetStatus, MediaType};
    use crate::use_cases::create_assets::{CreateAssetsUseCase, NewAsset};
    use crate::use_cases::test_support::{
        sample_attributes, FailureFlags, FixedClock, FlakyStore,
    };

    async fn store_with(gtins: &[&str]) -> FlakyStore {
        let store = FlakyStore::default();
        CreateAssetsUseCase {
            clock: FixedClock::at_epoch(1_700_000_000),
            store: store.clone(),
        }
        .execute(
            gtins
                .iter()
                .map(|gtin| NewAsset {
                    attributes: sample_attributes(gtin),
                    media: None,
                })
                .collect(),
        )
        .await
        .expect("expected seed to succeed");
        store
    }

    #[tokio::test]
    async fn when_gtin_exists_then_attributes_are_overwritten() {
        let store = store_with(&["0001"]).await;
        let before = store.list(&AssetFilter::default()).await.unwrap();
        let mut attributes = sample_attributes("0001");
        attributes.status = Some(AssetStatus::QaApproved);
        attributes.media_type = None;
        attributes.description = Some("front shot".to_string());
        attributes.has_copyright = true;

        let result = UpdateAssetsUseCase {
            store: store.clone(),
        }
        .execute(vec![attributes])
        .await
        .expect("expected update to succeed");

        assert_eq!(
            result,
            UpdateAssetsResponse {
                requested: 1,
                updated: 1
            }
        );
        let after = store.list(&AssetFilter::default()).await.unwrap();
        assert_eq!(after[0].id, before[0].id);
        assert_eq!(after[0].status, AssetStatus::QaApproved);
        assert_eq!(after[0].media_type, None);
        assert_eq!(after[0].description.as_deref(), Some("front shot"));
        assert_eq!(after[0].has_copyright, Some(true));
        assert_eq!(after[0].license_valid_from, before[0].license_valid_from);
    }

    #[tokio::test]
    async fn when_gtin_is_unknown_then_item_is_skipped() {
        let store = store_with(&["0001"]).await;
        let mut known = sample_attributes("0001");
        known.media_type = Some(MediaType::SwatchImage);

        let result = UpdateAssetsUseCase {
            store: store.clone(),
        }
        .execute(vec![sample_attributes("9999"), known])
        .await
        .expect("expected update to succeed");

        assert_eq!(result.requested, 2);
        assert_eq!(result.updated, 1);
        let after = store.list(&AssetFilter::default()).await.unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].media_type, Some(MediaType::SwatchImage));
    }

    #[tokio::test]
    async fn when_any_item_is_invalid_then_nothing_is_written() {
        let store = store_with(&["0001", "0002"]).await;
        let mut first = sample_attributes("0001");
        first.status = Some(AssetStatus::Retired);
        let mut second = sample_attributes("0002");
        second.resolution_key = None;

        let result = UpdateAssetsUseCase {
            store: store.clone(),
        }
        .execute(vec![first, second])
        .await;

        assert!(matches!(result, Err(MediaLakeError::InvalidAsset(_))));
        let after = store.list(&AssetFilter::default()).await.unwrap();
        assert!(after.iter().all(|asset| asset.status == AssetStatus::New));
    }

    #[tokio::test]
    async fn when_store_update_fails_then_returns_storage_failure() {
        let result = UpdateAssetsUseCase {
            store: FlakyStore::failing(FailureFlags {
                update: true,
                ..FailureFlags::default()
            }),
        }
        .execute(vec![sample_attributes("0001")])
        .await;

        assert_eq!(result, Err(MediaLakeError::StorageFailure));
    }
}
