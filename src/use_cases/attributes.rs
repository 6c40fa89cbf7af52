use crate::domain::entities::{AssetAttributes, ValidatedAttributes};
use crate::domain::errors::MediaLakeError;

// Check the columns storage requires before anything is written.
pub fn validate_attributes(
    attributes: AssetAttributes,
) -> Result<ValidatedAttributes, MediaLakeError> {
    require_text("gtin", &attributes.gtin)?;
    require_text("channel", &attributes.channel)?;
    require_text("mediaId", &attributes.media_id)?;

    let status = attributes
        .status
        .ok_or_else(|| missing(&attributes.gtin, "status"))?;
    let resolution_key = attributes
        .resolution_key
        .ok_or_else(|| missing(&attributes.gtin, "resolutionKey"))?;
    let resolution_in_px = match attributes.resolution_in_px {
        Some(value) if !value.is_empty() => value,
        _ => return Err(missing(&attributes.gtin, "resolutionInPx")),
    };

    Ok(ValidatedAttributes {
        gtin: attributes.gtin,
        channel: attributes.channel,
        media_id: attributes.media_id,
        content_type: attributes.content_type,
        media_type: attributes.media_type,
        description: attributes.description,
        brand: attributes.brand,
        category: attributes.category,
        status,
        resolution_key,
        resolution_in_px,
        has_copyright: attributes.has_copyright,
    })
}

fn require_text(field: &str, value: &str) -> Result<(), MediaLakeError> {
    if value.is_empty() {
        return Err(MediaLakeError::InvalidAsset(format!("{field} is required")));
    }
    Ok(())
}

fn missing(gtin: &str, field: &str) -> MediaLakeError {
    MediaLakeError::InvalidAsset(format!("{field} is required (gtin {gtin})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AssetStatus, ResolutionKey};
    use crate::use_cases::test_support::sample_attributes;

    #[test]
    fn when_all_required_fields_are_present_then_attributes_validate() {
        let validated = validate_attributes(sample_attributes("0001")).expect("expected valid");

        assert_eq!(validated.gtin, "0001");
        assert_eq!(validated.status, AssetStatus::New);
        assert_eq!(validated.resolution_key, ResolutionKey::Original);
        assert_eq!(validated.resolution_in_px, "4000x4000");
    }

    #[test]
    fn when_gtin_is_empty_then_returns_invalid_asset() {
        let mut attributes = sample_attributes("");
        attributes.gtin = String::new();

        let result = validate_attributes(attributes);

        assert_eq!(
            result,
            Err(MediaLakeError::InvalidAsset("gtin is required".to_string()))
        );
    }

    #[test]
    fn when_status_is_missing_then_message_names_field_and_gtin() {
        let mut attributes = sample_attributes("0002");
        attributes.status = None;

        let result = validate_attributes(attributes);

        assert_eq!(
            result,
            Err(MediaLakeError::InvalidAsset(
                "status is required (gtin 0002)".to_string()
            ))
        );
    }

    #[test]
    fn when_resolution_in_px_is_empty_then_returns_invalid_asset() {
        let mut attributes = sample_attributes("0003");
        attributes.resolution_in_px = Some(String::new());

        let result = validate_attributes(attributes);

        assert!(matches!(result, Err(MediaLakeError::InvalidAsset(_))));
    }
}
