#[derive(Clone)]
pub struct ReportConfig {
    agents: Vec<String>,
    json: bool,
}

impl ReportConfig {
    pub fn new(agents: Vec<String>, json: bool) -> Self {
        Self { agents, json }
    }

    /// Agents to report on; empty means every agent found plus the defaults.
    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn json(&self) -> bool {
        self.json
    }
}
