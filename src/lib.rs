//! Robots exclusion directives from `X-Robots-Tag` headers and `<meta>` tags.

pub mod directives;
pub mod robots;
pub mod source;

pub use directives::{DirectiveSet, DirectiveTable};
pub use robots::{RobotsDirectives, RobotsHeaders, RobotsMeta};
pub use source::{RobotsSource, SourceError};
