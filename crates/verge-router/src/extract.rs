//! Typed segment extractors.
//!
//! Each extractor both tests and converts a path segment in one step: a
//! rule that names an extractor is only satisfied when the conversion
//! succeeds, otherwise matching falls through to later rules. They are
//! plain parsing functions returning `Option`, not pattern-matching sugar.

use uuid::Uuid;

/// Parses a base-10 integer segment.
#[must_use]
pub fn int_segment(segment: &str) -> Option<i64> {
    segment.parse().ok()
}

/// Parses a canonical (hyphenated) UUID segment.
#[must_use]
pub fn uuid_segment(segment: &str) -> Option<Uuid> {
    // 36 chars pins the canonical form; Uuid::try_parse also accepts
    // simple/braced/urn spellings, which route segments do not.
    if segment.len() != 36 {
        return None;
    }
    Uuid::try_parse(segment).ok()
}

/// Accepts an email-shaped segment.
///
/// Deliberately permissive: the segment merely has to contain an `@`.
#[must_use]
pub fn email_segment(segment: &str) -> Option<&str> {
    segment.contains('@').then_some(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_segment() {
        assert_eq!(int_segment("7"), Some(7));
        assert_eq!(int_segment("-42"), Some(-42));
        assert_eq!(int_segment("007"), Some(7));
        assert_eq!(int_segment("abc"), None);
        assert_eq!(int_segment("7.5"), None);
        assert_eq!(int_segment(""), None);
        assert_eq!(int_segment("0x10"), None);
    }

    #[test]
    fn test_uuid_segment_accepts_canonical_form() {
        let parsed = uuid_segment("67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert!(parsed.is_some());
    }

    #[test]
    fn test_uuid_segment_rejects_non_canonical_spellings() {
        // Simple (unhyphenated) and braced forms are valid UUIDs but not
        // valid route segments.
        assert_eq!(uuid_segment("67e5504410b1426f9247bb680e5fe0c8"), None);
        assert_eq!(uuid_segment("{67e55044-10b1-426f-9247-bb680e5fe0c8}"), None);
        assert_eq!(uuid_segment("not-a-uuid"), None);
        assert_eq!(uuid_segment(""), None);
    }

    #[test]
    fn test_email_segment() {
        assert_eq!(email_segment("alice@example.com"), Some("alice@example.com"));
        assert_eq!(email_segment("@"), Some("@"));
        assert_eq!(email_segment("alice"), None);
    }
}
