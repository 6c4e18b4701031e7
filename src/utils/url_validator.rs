//! Validation of URLs submitted for shortening.

use crate::domain::error::ShortenerError;
use url::Url;

/// Checks that `raw` is a non-empty, syntactically valid absolute URI.
///
/// Returns the input with surrounding whitespace trimmed; this is the exact
/// string that gets stored and later used as the redirect target, so no
/// normalization is applied beyond the trim.
///
/// # Errors
///
/// - [`ShortenerError::EmptyUrl`] if the input is empty or whitespace only
/// - [`ShortenerError::InvalidUrl`] if the input has no scheme, does not parse,
///   or contains control characters (which cannot be sent in a `Location` header)
///
/// # Examples
///
/// ```
/// use url_shortener::utils::url_validator::validate_url;
///
/// assert_eq!(validate_url(" https://example.com/a ").unwrap(), "https://example.com/a");
/// assert!(validate_url("not a url").is_err());
/// ```
pub fn validate_url(raw: &str) -> Result<&str, ShortenerError> {
    let candidate = raw.trim();

    if candidate.is_empty() {
        return Err(ShortenerError::EmptyUrl);
    }

    if candidate.chars().any(char::is_control) {
        return Err(ShortenerError::InvalidUrl(
            "url contains control characters".to_string(),
        ));
    }

    Url::parse(candidate).map_err(|e| ShortenerError::InvalidUrl(e.to_string()))?;

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_urls() {
        assert_eq!(
            validate_url("https://example.com").unwrap(),
            "https://example.com"
        );
        assert_eq!(
            validate_url("http://example.com/path?q=1#frag").unwrap(),
            "http://example.com/path?q=1#frag"
        );
    }

    #[test]
    fn test_keeps_url_verbatim() {
        let url = "https://EXAMPLE.com:443/Some/Path/?b=2&a=1";
        assert_eq!(validate_url(url).unwrap(), url);
    }

    #[test]
    fn test_accepts_other_absolute_schemes() {
        assert!(validate_url("ftp://files.example.com/pub").is_ok());
        assert!(validate_url("mailto:someone@example.com").is_ok());
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            validate_url("  https://example.com/x\t").unwrap(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_empty_url() {
        assert_eq!(validate_url(""), Err(ShortenerError::EmptyUrl));
        assert_eq!(validate_url("   "), Err(ShortenerError::EmptyUrl));
        assert_eq!(validate_url("\n\t"), Err(ShortenerError::EmptyUrl));
    }

    #[test]
    fn test_not_a_url() {
        assert!(matches!(
            validate_url("not a url"),
            Err(ShortenerError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_relative_urls_rejected() {
        assert!(matches!(
            validate_url("/just/a/path"),
            Err(ShortenerError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_url("example.com"),
            Err(ShortenerError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_invalid_host_rejected() {
        assert!(matches!(
            validate_url("http://exa mple.com"),
            Err(ShortenerError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_control_characters_rejected() {
        assert!(matches!(
            validate_url("https://example.com/a\nb"),
            Err(ShortenerError::InvalidUrl(_))
        ));
    }
}
