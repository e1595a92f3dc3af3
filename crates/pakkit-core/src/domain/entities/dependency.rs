//! Dependency entity and `name[@range]` spec parsing.

use crate::domain::{error::DomainError, value_objects::DependencyType};

/// A single classified dependency entry.
///
/// Immutable once recorded; the registry replaces the whole entry when a
/// later write arrives for the same `(name, type)` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub version_range: String,
    pub dep_type: DependencyType,
}

impl Dependency {
    pub fn new(
        name: impl Into<String>,
        version_range: impl Into<String>,
        dep_type: DependencyType,
    ) -> Self {
        Self {
            name: name.into(),
            version_range: version_range.into(),
            dep_type,
        }
    }
}

/// Parse a `name[@range]` spec into `(name, range)`.
///
/// The range defaults to `"*"` when omitted. npm scope markers are part of
/// the name: a *leading* `@` opens a scope (`@scope/pkg@^1.0.0`), so the
/// range delimiter is the last `@` past position zero.
pub fn parse_spec(spec: &str) -> Result<(String, String), DomainError> {
    if spec.is_empty() {
        return Err(DomainError::invalid_spec(spec, "empty dependency name"));
    }

    let (name, range) = match spec.rfind('@').filter(|&idx| idx > 0) {
        Some(idx) => (&spec[..idx], &spec[idx + 1..]),
        None => (spec, ""),
    };

    if name.is_empty() {
        return Err(DomainError::invalid_spec(spec, "empty dependency name"));
    }

    let range = if range.is_empty() { "*" } else { range };
    Ok((name.to_string(), range.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_defaults_to_wildcard() {
        assert_eq!(
            parse_spec("lodash").unwrap(),
            ("lodash".into(), "*".into())
        );
    }

    #[test]
    fn name_with_range() {
        assert_eq!(
            parse_spec("aaa@^1.2.3").unwrap(),
            ("aaa".into(), "^1.2.3".into())
        );
        assert_eq!(
            parse_spec("bbb@~4.5.6").unwrap(),
            ("bbb".into(), "~4.5.6".into())
        );
    }

    #[test]
    fn scoped_name_without_range() {
        assert_eq!(
            parse_spec("@types/node").unwrap(),
            ("@types/node".into(), "*".into())
        );
    }

    #[test]
    fn scoped_name_with_range() {
        assert_eq!(
            parse_spec("@types/node@^18").unwrap(),
            ("@types/node".into(), "^18".into())
        );
    }

    #[test]
    fn empty_spec_is_rejected() {
        assert!(matches!(
            parse_spec(""),
            Err(DomainError::InvalidDependencySpec { .. })
        ));
    }

    #[test]
    fn leading_at_is_a_scope_marker_not_a_delimiter() {
        // "@^1.0.0" reads as a (bogus) scoped name, not an empty name plus
        // range — the range delimiter is only looked for past position zero.
        assert_eq!(
            parse_spec("@^1.0.0").unwrap(),
            ("@^1.0.0".into(), "*".into())
        );
    }

    #[test]
    fn multibyte_names_parse_without_panicking() {
        // The delimiter scan must stay on char boundaries even when the
        // name opens with a multi-byte character.
        assert_eq!(parse_spec("é@1.0.0").unwrap(), ("é".into(), "1.0.0".into()));
        assert_eq!(parse_spec("café").unwrap(), ("café".into(), "*".into()));
        assert_eq!(parse_spec("日本語@^2").unwrap(), ("日本語".into(), "^2".into()));
    }

    #[test]
    fn trailing_at_yields_wildcard() {
        // "foo@" — delimiter present, empty range, default applies.
        assert_eq!(parse_spec("foo@").unwrap(), ("foo".into(), "*".into()));
    }
}
