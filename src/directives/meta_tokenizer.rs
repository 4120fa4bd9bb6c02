use crate::directives::DirectiveSet;
use once_cell::sync::Lazy;
use regex::Regex;

pub const ROBOTS_AGENT: &str = "robots";

static MAX_SNIPPET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)max-snippet:(.*)").expect("valid max-snippet pattern"));
static MAX_IMAGE_PREVIEW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)max-image-preview:(\s)?(large|none|standard)")
        .expect("valid max-image-preview pattern")
});
static MAX_VIDEO_PREVIEW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)max-video-preview:(.*)").expect("valid max-video-preview pattern")
});

pub fn tokenize_meta_content(content: &str) -> DirectiveSet {
    let mut directives = DirectiveSet::default();
    for segment in content.split(',') {
        if let Some(value) = last_capture(&MAX_SNIPPET_REGEX, segment) {
            directives.max_snippet = Some(value);
        }
        if let Some(value) = last_capture(&MAX_IMAGE_PREVIEW_REGEX, segment) {
            directives.max_image_preview = Some(value);
        }
        if let Some(value) = last_capture(&MAX_VIDEO_PREVIEW_REGEX, segment) {
            directives.max_video_preview = Some(value);
        }

        let segment = segment.to_ascii_lowercase();
        directives.nofollow |= segment.contains("nofollow");
        directives.noindex |= segment.contains("noindex");
    }
    directives
}

fn last_capture(regex: &Regex, segment: &str) -> Option<String> {
    let captures = regex.captures(segment)?;
    let value = captures.get(captures.len() - 1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_owned())
}
