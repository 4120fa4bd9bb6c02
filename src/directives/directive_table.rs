use crate::directives::DirectiveSet;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DirectiveTable {
    default_agent: String,
    agents: BTreeMap<String, DirectiveSet>,
}

impl DirectiveTable {
    pub fn new(default_agent: &str) -> Self {
        Self {
            default_agent: default_agent.to_owned(),
            agents: BTreeMap::new(),
        }
    }

    /// Folds `(agent, directives)` pairs in order; later values win per field.
    pub fn from_pairs<I>(default_agent: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, DirectiveSet)>,
    {
        let mut table = Self::new(default_agent);
        for (agent, directives) in pairs {
            debug!("merging directives for agent '{}': {:?}", agent, directives);
            table.agents.entry(agent).or_default().merge(directives);
        }
        table
    }

    pub fn default_agent(&self) -> &str {
        self.default_agent.as_str()
    }

    pub fn agents(&self) -> impl Iterator<Item = &str> {
        self.agents.keys().map(String::as_str)
    }

    pub fn get(&self, agent: &str) -> Option<&DirectiveSet> {
        self.agents.get(agent)
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Tries `agent` (the default agent when `None`), then the default agent.
    pub fn resolve<'a, T, F>(&'a self, agent: Option<&str>, field: F) -> Option<T>
    where
        F: Fn(&'a DirectiveSet) -> Option<T>,
    {
        let agent = agent.unwrap_or(self.default_agent.as_str());
        self.agents
            .get(agent)
            .and_then(&field)
            .or_else(|| self.agents.get(self.default_agent.as_str()).and_then(&field))
    }

    pub fn flag<F>(&self, agent: Option<&str>, field: F) -> bool
    where
        F: Fn(&DirectiveSet) -> bool,
    {
        self.resolve(agent, |set| field(set).then_some(true))
            .unwrap_or(false)
    }

    pub fn value<'a, F>(&'a self, agent: Option<&str>, field: F) -> Option<&'a str>
    where
        F: Fn(&'a DirectiveSet) -> Option<&'a str>,
    {
        self.resolve(agent, field)
    }
}
