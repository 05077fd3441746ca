//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Supports:
/// - `${VAR}` - expands to the value of VAR, errors if unset
/// - `${VAR:-default}` - expands to VAR if set, otherwise uses default
///
/// Strings without a `${` are returned unchanged, so a bare `$` in a URL is
/// left alone.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Variable that was referenced but not set.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SHELF_EXPAND_SIMPLE", "Techshelf");
        }
        let result = expand_env("${SHELF_EXPAND_SIMPLE}", "site.title").unwrap();
        assert_eq!(result, "Techshelf");
        unsafe {
            std::env::remove_var("SHELF_EXPAND_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SHELF_EXPAND_UNSET");
        }
        let result = expand_env("${SHELF_EXPAND_UNSET:-Docs}", "site.title").unwrap();
        assert_eq!(result, "Docs");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SHELF_EXPAND_MISSING");
        }
        let err = expand_env("${SHELF_EXPAND_MISSING}", "site.social.github").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("SHELF_EXPAND_MISSING"));
        assert!(err.to_string().contains("site.social.github"));
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SHELF_EXPAND_OWNER", "ashutosh-aanand");
        }
        let result = expand_env(
            "https://github.com/${SHELF_EXPAND_OWNER}/my-techshelf",
            "site.social.github",
        )
        .unwrap();
        assert_eq!(result, "https://github.com/ashutosh-aanand/my-techshelf");
        unsafe {
            std::env::remove_var("SHELF_EXPAND_OWNER");
        }
    }

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("Techshelf", "site.title").unwrap(), "Techshelf");
        assert_eq!(
            expand_env("https://example.com/$path", "site.social.blog").unwrap(),
            "https://example.com/$path"
        );
    }
}
