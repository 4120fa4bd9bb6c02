use crate::directives::DirectiveSet;

pub const ROBOTS_TAG_MARKER: &str = "x-robots-tag";

pub const WILDCARD_AGENT: &str = "*";

const MAX_SNIPPET: &str = "max-snippet";
const MAX_IMAGE_PREVIEW: &str = "max-image-preview";
const MAX_VIDEO_PREVIEW: &str = "max-video-preview";

// Directives whose value follows a colon, so their name is never an agent.
const VALUED_DIRECTIVES: [&str; 4] = [
    MAX_SNIPPET,
    MAX_IMAGE_PREVIEW,
    MAX_VIDEO_PREVIEW,
    "unavailable_after",
];

pub(crate) fn starts_with_marker(text: &str) -> bool {
    text.get(..ROBOTS_TAG_MARKER.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ROBOTS_TAG_MARKER))
}

/// Splits one `X-Robots-Tag` value (or whole header line) into
/// `(agent, directives)` pairs. An agent-less clause belongs to the agent of
/// the clause before it, [`WILDCARD_AGENT`] for the first one.
pub fn tokenize_header(candidate: &str) -> Vec<(String, DirectiveSet)> {
    let text = strip_marker(candidate);

    let mut agent = WILDCARD_AGENT.to_owned();
    let mut pairs = Vec::new();
    for clause in text.split(',') {
        let parts: Vec<&str> = clause.split(':').map(str::trim).collect();
        let options = match parts.as_slice() {
            [target, options @ ..] if !options.is_empty() && is_agent(target) => {
                agent = (*target).to_owned();
                options
            }
            options => options,
        };

        let directives = parse_options(options);
        if !directives.is_empty() {
            pairs.push((agent.clone(), directives));
        }
    }
    pairs
}

fn strip_marker(candidate: &str) -> &str {
    if !starts_with_marker(candidate) {
        return candidate;
    }
    let rest = candidate[ROBOTS_TAG_MARKER.len()..].trim_start();
    rest.strip_prefix(':').unwrap_or(rest)
}

// Dates (`25-Jun-10 15:00:00`) split on colons too; agents are single tokens.
fn is_agent(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '*'))
        && !part.chars().all(|c| c.is_ascii_digit())
        && !VALUED_DIRECTIVES
            .iter()
            .any(|name| part.eq_ignore_ascii_case(name))
}

fn parse_options(options: &[&str]) -> DirectiveSet {
    let mut directives = DirectiveSet::default();
    let (Some(name), Some(value)) = (options.first(), options.last()) else {
        return directives;
    };

    let name = name.to_ascii_lowercase();
    let value = (options.len() > 1 && !value.is_empty()).then(|| (*value).to_owned());
    match name.as_str() {
        MAX_SNIPPET => directives.max_snippet = value,
        MAX_IMAGE_PREVIEW => directives.max_image_preview = value,
        MAX_VIDEO_PREVIEW => directives.max_video_preview = value,
        _ => {}
    }

    let option = options.join(":").to_ascii_lowercase();
    directives.noindex = option.contains("noindex");
    directives.nofollow = option.contains("nofollow");
    directives.none = option.contains("none");
    directives
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn agents(pairs: &[(String, DirectiveSet)]) -> Vec<&str> {
        pairs.iter().map(|(agent, _)| agent.as_str()).collect()
    }

    #[test]
    fn test_untargeted_flags_go_to_wildcard() {
        let pairs = tokenize_header("nofollow, noindex");

        assert_eq!(agents(&pairs), vec!["*", "*"]);
        assert!(pairs[0].1.nofollow());
        assert!(pairs[1].1.noindex());
    }

    #[test]
    fn test_agent_prefix_covers_following_clauses() {
        let pairs = tokenize_header("google: nofollow, noindex");

        assert_eq!(agents(&pairs), vec!["google", "google"]);
        assert!(pairs[0].1.nofollow());
        assert!(pairs[1].1.noindex());
    }

    #[test]
    fn test_header_line_marker_is_stripped() {
        let pairs = tokenize_header("X-Robots-Tag: google: max-snippet: 20");

        assert_eq!(agents(&pairs), vec!["google"]);
        assert_eq!(pairs[0].1.max_snippet(), Some("20"));
    }

    #[test]
    fn test_untargeted_bounded_value() {
        let pairs = tokenize_header("max-video-preview: -1");

        assert_eq!(agents(&pairs), vec!["*"]);
        assert_eq!(pairs[0].1.max_video_preview(), Some("-1"));
    }

    #[test]
    fn test_image_preview_none_also_sets_none_flag() {
        let pairs = tokenize_header("google: max-image-preview: none");

        assert_eq!(agents(&pairs), vec!["google"]);
        assert_eq!(pairs[0].1.max_image_preview(), Some("none"));
        assert!(pairs[0].1.none());
    }

    #[test]
    fn test_date_with_comma_is_not_an_agent() {
        let pairs = tokenize_header("unavailable_after: Friday, 25-Jun-10 15:00:00 PST, noindex");

        assert_eq!(agents(&pairs), vec!["*"]);
        assert!(pairs[0].1.noindex());
    }

    #[test]
    fn test_agent_tokens() {
        assert!(is_agent("googlebot-news"));
        assert!(is_agent("*"));
        assert!(!is_agent("25-Jun-10 15"));
        assert!(!is_agent("15"));
        assert!(!is_agent("Max-Snippet"));
    }

    #[test]
    fn test_flattened_values_split_per_clause() {
        let pairs = tokenize_header(
            "google: max-snippet: 20,google: max-image-preview: standard,bing: noindex",
        );

        assert_eq!(agents(&pairs), vec!["google", "google", "bing"]);
        assert_eq!(pairs[1].1.max_image_preview(), Some("standard"));
        assert!(pairs[2].1.noindex());
    }

    #[test]
    fn test_unrecognized_clauses_are_dropped() {
        assert!(tokenize_header("").is_empty());
        assert!(tokenize_header("all, max-snippet:").is_empty());
        assert!(tokenize_header("unavailable_after: 25 Jun 2010 15:00:00 PST").is_empty());
    }

    #[test]
    fn test_flags_match_case_insensitively() {
        let pairs = tokenize_header("NONE");

        assert!(pairs[0].1.none());
    }

    #[test]
    fn test_marker_detection() {
        assert!(starts_with_marker("X-Robots-Tag: noindex"));
        assert!(!starts_with_marker("noindex"));
        assert!(!starts_with_marker("x-robots"));
    }
}
