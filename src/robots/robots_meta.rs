use crate::directives::{DirectiveTable, ROBOTS_AGENT, tokenize_meta_content};
use crate::robots::{MetaTags, RobotsDirectives, extract_meta_tags};
use crate::source::{RobotsSource, SourceError};
use log::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotsMeta {
    meta_tags: MetaTags,
    table: DirectiveTable,
}

impl RobotsMeta {
    pub fn create(html: &str) -> Self {
        let meta_tags = extract_meta_tags(html);
        debug!("{} distinct meta keys", meta_tags.len());
        let table = DirectiveTable::from_pairs(
            ROBOTS_AGENT,
            meta_tags
                .iter()
                .flat_map(|(agent, group)| {
                    group
                        .contents()
                        .iter()
                        .map(move |content| (agent.to_owned(), tokenize_meta_content(content)))
                })
                .filter(|(_, directives)| !directives.is_empty()),
        );
        Self { meta_tags, table }
    }

    pub async fn read_from(source: &str) -> Result<Self, SourceError> {
        Ok(RobotsSource::load(source).await?.meta())
    }

    pub fn meta_tags(&self) -> &MetaTags {
        &self.meta_tags
    }
}

impl RobotsDirectives for RobotsMeta {
    fn table(&self) -> &DirectiveTable {
        &self.table
    }
}
