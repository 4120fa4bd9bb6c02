use serde::Serialize;

/// Flags only ever go from `false` to `true`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DirectiveSet {
    #[serde(skip_serializing_if = "is_false")]
    pub(crate) noindex: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub(crate) nofollow: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub(crate) none: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_image_preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_video_preview: Option<String>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl DirectiveSet {
    pub fn noindex(&self) -> bool {
        self.noindex
    }

    pub fn nofollow(&self) -> bool {
        self.nofollow
    }

    pub fn none(&self) -> bool {
        self.none
    }

    pub fn max_snippet(&self) -> Option<&str> {
        self.max_snippet.as_deref()
    }

    pub fn max_image_preview(&self) -> Option<&str> {
        self.max_image_preview.as_deref()
    }

    pub fn max_video_preview(&self) -> Option<&str> {
        self.max_video_preview.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// A bounded value is replaced only when `other` defines it.
    pub fn merge(&mut self, other: DirectiveSet) {
        self.noindex |= other.noindex;
        self.nofollow |= other.nofollow;
        self.none |= other.none;
        if other.max_snippet.is_some() {
            self.max_snippet = other.max_snippet;
        }
        if other.max_image_preview.is_some() {
            self.max_image_preview = other.max_image_preview;
        }
        if other.max_video_preview.is_some() {
            self.max_video_preview = other.max_video_preview;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn noindex_with_snippet(snippet: &str) -> DirectiveSet {
        DirectiveSet {
            noindex: true,
            max_snippet: Some(snippet.to_owned()),
            ..DirectiveSet::default()
        }
    }

    #[test]
    fn test_merge_ors_flags() {
        let mut set = DirectiveSet {
            nofollow: true,
            ..DirectiveSet::default()
        };
        set.merge(noindex_with_snippet("20"));

        assert!(set.noindex());
        assert!(set.nofollow());
        assert!(!set.none());
    }

    #[test]
    fn test_merge_never_clears() {
        let mut set = noindex_with_snippet("20");
        set.merge(DirectiveSet::default());

        assert_eq!(set, noindex_with_snippet("20"));
    }

    #[test]
    fn test_merge_later_value_wins() {
        let mut set = noindex_with_snippet("20");
        set.merge(noindex_with_snippet("50"));

        assert_eq!(set.max_snippet(), Some("50"));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut once = DirectiveSet::default();
        once.merge(noindex_with_snippet("20"));
        let mut twice = once.clone();
        twice.merge(noindex_with_snippet("20"));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_serialize_skips_absent_directives() {
        let json = serde_json::to_string(&noindex_with_snippet("20")).unwrap();

        assert_eq!(json, r#"{"noindex":true,"max-snippet":"20"}"#);
    }
}
