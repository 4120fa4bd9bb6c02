use crate::directives::{DirectiveTable, WILDCARD_AGENT, tokenize_header};
use crate::robots::{HeaderEntry, HeaderValue, RobotsDirectives, extract_robots_headers};
use crate::source::{RobotsSource, SourceError};
use log::debug;

/// Unlike [`RobotsMeta`](crate::robots::RobotsMeta), `none` blocks both
/// indexing and following.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotsHeaders {
    table: DirectiveTable,
}

impl RobotsHeaders {
    pub fn new(entries: &[HeaderEntry]) -> Self {
        let candidates = extract_robots_headers(entries);
        debug!("{} robots header candidates", candidates.len());
        let table = DirectiveTable::from_pairs(
            WILDCARD_AGENT,
            candidates
                .iter()
                .flat_map(|candidate| tokenize_header(candidate)),
        );
        Self { table }
    }

    pub fn create<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<HeaderValue>,
    {
        let entries: Vec<HeaderEntry> = headers
            .into_iter()
            .map(|(name, value)| HeaderEntry::new(name, value))
            .collect();
        Self::new(&entries)
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<HeaderEntry> = lines.into_iter().map(HeaderEntry::line).collect();
        Self::new(&entries)
    }

    pub fn from_header_map(headers: &reqwest::header::HeaderMap) -> Self {
        let entries: Vec<HeaderEntry> = headers
            .iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some(HeaderEntry::new(name.as_str(), value))
            })
            .collect();
        Self::new(&entries)
    }

    /// Local files have no headers and yield an empty result.
    pub async fn read_from(source: &str) -> Result<Self, SourceError> {
        Ok(RobotsSource::load(source).await?.headers())
    }
}

impl RobotsDirectives for RobotsHeaders {
    fn table(&self) -> &DirectiveTable {
        &self.table
    }

    fn may_index<'a>(&self, user_agent: impl Into<Option<&'a str>>) -> bool {
        let user_agent = user_agent.into();
        !self.none(user_agent) && !self.noindex(user_agent)
    }

    fn may_follow<'a>(&self, user_agent: impl Into<Option<&'a str>>) -> bool {
        let user_agent = user_agent.into();
        !self.none(user_agent) && !self.nofollow(user_agent)
    }
}
