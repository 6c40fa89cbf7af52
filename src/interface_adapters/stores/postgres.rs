use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::error;
use uuid::Uuid;

use crate::domain::entities::{
    AssetFilter, DeleteCriteria, DeleteOutcome, MediaAsset, MediaPayload, MediaType,
    ValidatedAttributes,
};
use crate::domain::errors::{MediaLakeError, UnknownVariant};
use crate::domain::ports::MediaAssetStore;

const SELECT_COLUMNS: &str = r#"
    SELECT id, gtin, channel, media_id, content_type, media_type, description, brand,
           category, has_copyright, media, status, resolution_key, resolution_in_px,
           size_in_bytes, license_valid_from, license_valid_until, source_url,
           source_url_valid_from, source_url_valid_until
    FROM media_assets
    WHERE TRUE"#;

// PostgreSQL-backed asset store.
#[derive(Clone)]
pub struct PostgresMediaAssetStore {
    pub db: PgPool,
}

// Raw row shape; enum columns are TEXT and parsed on the way out.
#[derive(sqlx::FromRow)]
struct MediaAssetRow {
    id: Uuid,
    gtin: String,
    channel: String,
    media_id: String,
    content_type: String,
    media_type: Option<String>,
    description: Option<String>,
    brand: Option<String>,
    category: Option<String>,
    has_copyright: Option<bool>,
    media: Option<Json<MediaPayload>>,
    status: String,
    resolution_key: String,
    resolution_in_px: String,
    size_in_bytes: Option<i64>,
    license_valid_from: DateTime<Utc>,
    license_valid_until: DateTime<Utc>,
    source_url: Option<String>,
    source_url_valid_from: Option<DateTime<Utc>>,
    source_url_valid_until: Option<DateTime<Utc>>,
}

impl TryFrom<MediaAssetRow> for MediaAsset {
    type Error = UnknownVariant;

    fn try_from(row: MediaAssetRow) -> Result<Self, Self::Error> {
        Ok(MediaAsset {
            id: row.id,
            gtin: row.gtin,
            channel: row.channel,
            media_id: row.media_id,
            content_type: row.content_type.parse()?,
            media_type: row
                .media_type
                .as_deref()
                .map(str::parse::<MediaType>)
                .transpose()?,
            description: row.description,
            brand: row.brand,
            category: row.category,
            has_copyright: row.has_copyright,
            media: row.media.map(|Json(media)| media),
            status: row.status.parse()?,
            resolution_key: row.resolution_key.parse()?,
            resolution_in_px: row.resolution_in_px,
            size_in_bytes: row.size_in_bytes,
            license_valid_from: row.license_valid_from,
            license_valid_until: row.license_valid_until,
            source_url: row.source_url,
            source_url_valid_from: row.source_url_valid_from,
            source_url_valid_until: row.source_url_valid_until,
        })
    }
}

fn storage_failure(operation: &'static str) -> impl Fn(sqlx::Error) -> MediaLakeError {
    move |err| {
        error!(error = %err, operation, "media asset query failed");
        MediaLakeError::StorageFailure
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

fn push_delete_criteria<'a>(query: &mut QueryBuilder<'a, Postgres>, criteria: &'a DeleteCriteria) {
    if let Some(channel) = &criteria.channel {
        query.push(" AND channel = ").push_bind(channel.as_str());
    }
    if let Some(gtin) = &criteria.gtin {
        query.push(" AND gtin = ").push_bind(gtin.as_str());
    }
    if let Some(media_id) = &criteria.media_id {
        query.push(" AND media_id = ").push_bind(media_id.as_str());
    }
    if let Some(content_type) = criteria.content_type {
        query.push(" AND content_type = ").push_bind(content_type.as_str());
    }
}

#[async_trait]
impl MediaAssetStore for PostgresMediaAssetStore {
    async fn list(&self, filter: &AssetFilter) -> Result<Vec<MediaAsset>, MediaLakeError> {
        let mut query = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
        if let Some(gtin) = &filter.gtin {
            query.push(" AND gtin = ").push_bind(gtin.as_str());
        }
        if let Some(channel) = &filter.channel {
            query.push(" AND channel = ").push_bind(channel.as_str());
        }
        if let Some(media_id) = &filter.media_id {
            query.push(" AND media_id = ").push_bind(media_id.as_str());
        }
        if let Some(content_type) = filter.content_type {
            query.push(" AND content_type = ").push_bind(content_type.as_str());
        }
        if let Some(media_type) = filter.media_type {
            query.push(" AND media_type = ").push_bind(media_type.as_str());
        }
        if let Some(resolution_key) = filter.resolution_key {
            query.push(" AND resolution_key = ").push_bind(resolution_key.as_str());
        }
        query.push(" ORDER BY gtin");

        let rows: Vec<MediaAssetRow> = query
            .build_query_as()
            .fetch_all(&self.db)
            .await
            .map_err(storage_failure("list"))?;

        rows.into_iter()
            .map(|row| {
                MediaAsset::try_from(row).map_err(|err| {
                    error!(error = %err, "stored media asset is invalid");
                    MediaLakeError::StorageFailure
                })
            })
            .collect()
    }

    async fn insert_all(&self, assets: Vec<MediaAsset>) -> Result<(), MediaLakeError> {
        let mut tx = self.db.begin().await.map_err(storage_failure("begin"))?;

        for asset in &assets {
            let result = sqlx::query(
                r#"
                INSERT INTO media_assets (
                    id, gtin, channel, media_id, content_type, media_type, description,
                    brand, category, has_copyright, media, status, resolution_key,
                    resolution_in_px, size_in_bytes, license_valid_from, license_valid_until,
                    source_url, source_url_valid_from, source_url_valid_until
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                        $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
                "#,
            )
            .bind(asset.id)
            .bind(&asset.gtin)
            .bind(&asset.channel)
            .bind(&asset.media_id)
            .bind(asset.content_type.as_str())
            .bind(asset.media_type.map(|t| t.as_str()))
            .bind(&asset.description)
            .bind(&asset.brand)
            .bind(&asset.category)
            .bind(asset.has_copyright)
            .bind(asset.media.as_ref().map(Json))
            .bind(asset.status.as_str())
            .bind(asset.resolution_key.as_str())
            .bind(&asset.resolution_in_px)
            .bind(asset.size_in_bytes)
            .bind(asset.license_valid_from)
            .bind(asset.license_valid_until)
            .bind(&asset.source_url)
            .bind(asset.source_url_valid_from)
            .bind(asset.source_url_valid_until)
            .execute(&mut *tx)
            .await;

            match result {
                Ok(_) => {}
                Err(err) if is_unique_violation(&err) => {
                    return Err(MediaLakeError::DuplicateGtin(asset.gtin.clone()));
                }
                Err(err) => return Err(storage_failure("insert")(err)),
            }
        }

        tx.commit().await.map_err(storage_failure("commit"))
    }

    async fn update_all(&self, updates: Vec<ValidatedAttributes>) -> Result<usize, MediaLakeError> {
        let mut tx = self.db.begin().await.map_err(storage_failure("begin"))?;

        let mut updated = 0;
        for attributes in &updates {
            let result = sqlx::query(
                r#"
                UPDATE media_assets SET
                    channel = $2,
                    media_id = $3,
                    content_type = $4,
                    media_type = $5,
                    description = $6,
                    brand = $7,
                    category = $8,
                    status = $9,
                    resolution_key = $10,
                    resolution_in_px = $11,
                    has_copyright = $12
                WHERE gtin = $1
                "#,
            )
            .bind(&attributes.gtin)
            .bind(&attributes.channel)
            .bind(&attributes.media_id)
            .bind(attributes.content_type.as_str())
            .bind(attributes.media_type.map(|t| t.as_str()))
            .bind(&attributes.description)
            .bind(&attributes.brand)
            .bind(&attributes.category)
            .bind(attributes.status.as_str())
            .bind(attributes.resolution_key.as_str())
            .bind(&attributes.resolution_in_px)
            .bind(attributes.has_copyright)
            .execute(&mut *tx)
            .await
            .map_err(storage_failure("update"))?;

            updated += result.rows_affected() as usize;
        }

        tx.commit().await.map_err(storage_failure("commit"))?;
        Ok(updated)
    }

    async fn delete_one(&self, criteria: &DeleteCriteria) -> Result<DeleteOutcome, MediaLakeError> {
        let mut tx = self.db.begin().await.map_err(storage_failure("begin"))?;

        let mut query = QueryBuilder::<Postgres>::new("SELECT id FROM media_assets WHERE TRUE");
        push_delete_criteria(&mut query, criteria);
        query.push(" LIMIT 2 FOR UPDATE");

        let ids: Vec<Uuid> = query
            .build_query_scalar()
            .fetch_all(&mut *tx)
            .await
            .map_err(storage_failure("delete lookup"))?;

        let outcome = match ids.as_slice() {
            [] => DeleteOutcome::NotFound,
            [id] => {
                sqlx::query("DELETE FROM media_assets WHERE id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await
                    .map_err(storage_failure("delete"))?;
                DeleteOutcome::Deleted
            }
            _ => DeleteOutcome::Ambiguous,
        };

        tx.commit().await.map_err(storage_failure("commit"))?;
        Ok(outcome)
    }
}
