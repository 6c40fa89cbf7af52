use std::sync::Arc;

use crate::domain::errors::AuthError;

// Shared-secret check applied to every media route.
#[derive(Clone)]
pub struct ApiKeyGuard {
    pub expected: Arc<str>,
}

impl ApiKeyGuard {
    pub fn new(expected: impl Into<Arc<str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    // Raw header bytes; a present key that is not valid text is still a wrong key.
    // An empty configured key never matches, since empty headers are rejected first.
    pub fn check(&self, presented: Option<&[u8]>) -> Result<(), AuthError> {
        let presented = match presented {
            Some(value) if !value.is_empty() => value,
            _ => return Err(AuthError::MissingApiKey),
        };

        if !constant_time_eq(presented, self.expected.as_bytes()) {
            return Err(AuthError::InvalidApiKey);
        }

        Ok(())
    }
}

// Time depends only on the lengths, not on where the first difference is.
fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.iter()
        .zip(right)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_key_matches_then_check_passes() {
        let guard = ApiKeyGuard::new("secret");

        assert_eq!(guard.check(Some(b"secret".as_slice())), Ok(()));
    }

    #[test]
    fn when_header_is_missing_then_returns_missing_api_key() {
        let guard = ApiKeyGuard::new("secret");

        assert_eq!(guard.check(None), Err(AuthError::MissingApiKey));
    }

    #[test]
    fn when_header_is_empty_then_returns_missing_api_key() {
        let guard = ApiKeyGuard::new("secret");

        assert_eq!(guard.check(Some(b"".as_slice())), Err(AuthError::MissingApiKey));
    }

    #[test]
    fn when_key_differs_then_returns_invalid_api_key() {
        let guard = ApiKeyGuard::new("secret");

        assert_eq!(guard.check(Some(b"Secret".as_slice())), Err(AuthError::InvalidApiKey));
        assert_eq!(guard.check(Some(b"secret2".as_slice())), Err(AuthError::InvalidApiKey));
    }

    #[test]
    fn when_key_is_not_ascii_then_returns_invalid_api_key() {
        let guard = ApiKeyGuard::new("cle");

        assert_eq!(
            guard.check(Some(b"cl\xc3\xa9".as_slice())),
            Err(AuthError::InvalidApiKey)
        );
    }

    #[test]
    fn when_configured_key_is_empty_then_no_header_is_accepted() {
        let guard = ApiKeyGuard::new("");

        assert_eq!(guard.check(Some(b"anything".as_slice())), Err(AuthError::InvalidApiKey));
        assert_eq!(guard.check(Some(b"".as_slice())), Err(AuthError::MissingApiKey));
    }

    #[test]
    fn when_lengths_or_bytes_differ_then_constant_time_eq_is_false() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
        assert!(constant_time_eq(b"", b""));
    }
}
