use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

// Tag body without the trailing self-closing slash.
static META_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<\s*meta\s([^>]*?)\s*/?\s*>").expect("valid meta tag pattern"));

static ATTRIBUTE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)([^\s"'>/=]+)\s*(?:=\s*(?:"\s*([^"]*?)\s*"|'\s*([^']*?)\s*'|([^\s"'>]+)))?"#,
    )
    .expect("valid attribute pattern")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetaGroup {
    Single(String),
    Multiple(Vec<String>),
}

impl MetaGroup {
    pub fn contents(&self) -> &[String] {
        match self {
            MetaGroup::Single(content) => std::slice::from_ref(content),
            MetaGroup::Multiple(contents) => contents.as_slice(),
        }
    }

    fn push(&mut self, content: String) {
        match self {
            MetaGroup::Single(first) => {
                *self = MetaGroup::Multiple(vec![std::mem::take(first), content]);
            }
            MetaGroup::Multiple(contents) => contents.push(content),
        }
    }
}

/// Grouped by `name`, `property` or `http-equiv`, in order of first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetaTags {
    groups: Vec<(String, MetaGroup)>,
    index: HashMap<String, usize>,
}

impl MetaTags {
    pub fn get(&self, key: &str) -> Option<&MetaGroup> {
        self.index.get(key).map(|&position| &self.groups[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaGroup)> {
        self.groups
            .iter()
            .map(|(key, group)| (key.as_str(), group))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn insert(&mut self, key: String, content: String) {
        match self.index.get(&key) {
            Some(&position) => self.groups[position].1.push(content),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, MetaGroup::Single(content)));
            }
        }
    }
}

pub fn extract_meta_tags(html: &str) -> MetaTags {
    let mut meta_tags = MetaTags::default();
    for tag in META_TAG_REGEX.captures_iter(html) {
        let Some(body) = tag.get(1) else {
            continue;
        };
        if let Some((key, content)) = key_and_content(body.as_str()) {
            debug!("found meta tag '{}' with content '{}'", key, content);
            meta_tags.insert(key, content);
        }
    }
    meta_tags
}

fn key_and_content(body: &str) -> Option<(String, String)> {
    let mut key = None;
    let mut content = None;
    for attribute in ATTRIBUTE_REGEX.captures_iter(body) {
        let Some(value) = attribute_value(&attribute) else {
            continue;
        };
        let name = attribute[1].to_ascii_lowercase();
        match name.as_str() {
            "name" | "property" | "http-equiv" if key.is_none() => key = Some(value),
            "content" if content.is_none() => content = Some(value),
            _ => {}
        }
    }
    key.zip(content)
}

fn attribute_value(attribute: &Captures<'_>) -> Option<String> {
    (2..=4)
        .find_map(|group| attribute.get(group))
        .map(|value| value.as_str().trim().to_owned())
}
