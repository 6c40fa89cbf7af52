use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::errors::UnknownVariant;

// Closed set of wire values backed by a TEXT column.
macro_rules! wire_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(ContentType, "contentType", {
    Tiff => "image/tiff",
    Png => "image/png",
    Jpeg => "image/jpeg",
    Gif => "image/gif",
    Bmp => "image/bmp",
});

wire_enum!(MediaType, "mediaType", {
    MainImage => "MainImage",
    AuxiliaryImage => "AuxiliaryImage",
    AdditionalImage => "AdditionalImage",
    SwatchImage => "SwatchImage",
});

// Asset lifecycle, in workflow order.
wire_enum!(AssetStatus, "status", {
    New => "ML010New",
    Imported => "ML030Imported",
    QaPending => "ML060QaPending",
    QaApproved => "ML070QaApproved",
    Retired => "ML090Retired",
    Error => "ML099Error",
});

wire_enum!(ResolutionKey, "resolutionKey", {
    Original => "ORIGINAL",
    X240 => "X240",
    X1024 => "X1024",
    X2048 => "X2048",
});

/// Binary source for an asset: either an inline payload or a time-limited URL.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPayload {
    pub payload: Option<String>,
    pub source_url: Option<String>,
    pub source_url_valid_until: Option<DateTime<Utc>>,
}

impl MediaPayload {
    // An inline payload excludes both source URL fields.
    pub fn is_exclusive(&self) -> bool {
        let has_payload = self.payload.as_deref().is_some_and(|p| !p.is_empty());
        !(has_payload && (self.source_url().is_some() || self.source_url_valid_until.is_some()))
    }

    // Source URL, treating an empty string as absent.
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Caller-supplied fields shared by the create and update flows.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetAttributes {
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
}

/// Attributes after the storage-required fields have been checked.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedAttributes {
    pub gtin: String,
    pub channel: String,
    pub media_id: String,
    pub content_type: ContentType,
    pub media_type: Option<MediaType>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub status: AssetStatus,
    pub resolution_key: ResolutionKey,
    pub resolution_in_px: String,
    pub has_copyright: bool,
}

// Persisted media asset record.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaAsset {
    pub id: Uuid,
    pub gtin: String,
    pub channel: String,
    pub media_id: String,
    pub content_type: ContentType,
    pub media_type: Option<MediaType>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub has_copyright: Option<bool>,
    pub media: Option<MediaPayload>,
    pub status: AssetStatus,
    pub resolution_key: ResolutionKey,
    pub resolution_in_px: String,
    pub size_in_bytes: Option<i64>,
    pub license_valid_from: DateTime<Utc>,
    pub license_valid_until: DateTime<Utc>,
    pub source_url: Option<String>,
    pub source_url_valid_from: Option<DateTime<Utc>>,
    pub source_url_valid_until: Option<DateTime<Utc>>,
}

impl MediaAsset {
    // Overwrite the caller-controlled columns, keeping identity and license data.
    pub fn apply(&mut self, attributes: &ValidatedAttributes) {
        self.gtin = attributes.gtin.clone();
        self.channel = attributes.channel.clone();
        self.media_id = attributes.media_id.clone();
        self.content_type = attributes.content_type;
        self.media_type = attributes.media_type;
        self.description = attributes.description.clone();
        self.brand = attributes.brand.clone();
        self.category = attributes.category.clone();
        self.status = attributes.status;
        self.resolution_key = attributes.resolution_key;
        self.resolution_in_px = attributes.resolution_in_px.clone();
        self.has_copyright = Some(attributes.has_copyright);
    }
}

/// Exact-match criteria for listing assets. Unset fields match anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetFilter {
    pub gtin: Option<String>,
    pub channel: Option<String>,
    pub media_id: Option<String>,
    pub content_type: Option<ContentType>,
    pub media_type: Option<MediaType>,
    pub resolution_key: Option<ResolutionKey>,
}

impl AssetFilter {
    pub fn matches(&self, asset: &MediaAsset) -> bool {
        self.gtin.as_ref().is_none_or(|v| *v == asset.gtin)
            && self.channel.as_ref().is_none_or(|v| *v == asset.channel)
            && self.media_id.as_ref().is_none_or(|v| *v == asset.media_id)
            && self.content_type.is_none_or(|v| v == asset.content_type)
            && self.media_type.is_none_or(|v| Some(v) == asset.media_type)
            && self.resolution_key.is_none_or(|v| v == asset.resolution_key)
    }
}

/// Exact-match criteria selecting a single asset to delete.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteCriteria {
    pub channel: Option<String>,
    pub gtin: Option<String>,
    pub media_id: Option<String>,
    pub content_type: Option<ContentType>,
}

impl DeleteCriteria {
    pub fn is_empty(&self) -> bool {
        self.channel.is_none()
            && self.gtin.is_none()
            && self.media_id.is_none()
            && self.content_type.is_none()
    }

    pub fn matches(&self, asset: &MediaAsset) -> bool {
        self.channel.as_ref().is_none_or(|v| *v == asset.channel)
            && self.gtin.as_ref().is_none_or(|v| *v == asset.gtin)
            && self.media_id.as_ref().is_none_or(|v| *v == asset.media_id)
            && self.content_type.is_none_or(|v| v == asset.content_type)
    }
}

// Result of a single-asset delete attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Ambiguous,
}
