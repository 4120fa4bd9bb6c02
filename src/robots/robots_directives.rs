use crate::directives::{DirectiveSet, DirectiveTable};

/// `None` queries the default agent. Fields an agent leaves unset fall back
/// to the default agent.
pub trait RobotsDirectives {
    fn table(&self) -> &DirectiveTable;

    fn default_agent(&self) -> &str {
        self.table().default_agent()
    }

    fn may_index<'a>(&self, user_agent: impl Into<Option<&'a str>>) -> bool {
        !self.noindex(user_agent)
    }

    fn may_follow<'a>(&self, user_agent: impl Into<Option<&'a str>>) -> bool {
        !self.nofollow(user_agent)
    }

    fn noindex<'a>(&self, user_agent: impl Into<Option<&'a str>>) -> bool {
        self.table().flag(user_agent.into(), DirectiveSet::noindex)
    }

    fn nofollow<'a>(&self, user_agent: impl Into<Option<&'a str>>) -> bool {
        self.table().flag(user_agent.into(), DirectiveSet::nofollow)
    }

    fn none<'a>(&self, user_agent: impl Into<Option<&'a str>>) -> bool {
        self.table().flag(user_agent.into(), DirectiveSet::none)
    }

    fn max_snippet<'a>(&self, user_agent: impl Into<Option<&'a str>>) -> Option<&str> {
        self.table()
            .value(user_agent.into(), DirectiveSet::max_snippet)
    }

    fn max_image_preview<'a>(&self, user_agent: impl Into<Option<&'a str>>) -> Option<&str> {
        self.table()
            .value(user_agent.into(), DirectiveSet::max_image_preview)
    }

    fn max_video_preview<'a>(&self, user_agent: impl Into<Option<&'a str>>) -> Option<&str> {
        self.table()
            .value(user_agent.into(), DirectiveSet::max_video_preview)
    }

    /// No default-agent fallback.
    fn get_directives<'a>(&self, user_agent: impl Into<Option<&'a str>>) -> DirectiveSet {
        let table = self.table();
        let agent = user_agent.into().unwrap_or(table.default_agent());
        table.get(agent).cloned().unwrap_or_default()
    }
}
