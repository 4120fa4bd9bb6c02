mod header_extractor;
mod header_value;
mod meta_extractor;
mod robots_directives;
mod robots_headers;
mod robots_meta;

pub use header_extractor::{HeaderEntry, extract_robots_headers};
pub use header_value::HeaderValue;
pub use meta_extractor::{MetaGroup, MetaTags, extract_meta_tags};
pub use robots_directives::RobotsDirectives;
pub use robots_headers::RobotsHeaders;
pub use robots_meta::RobotsMeta;
