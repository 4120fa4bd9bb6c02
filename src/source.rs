mod robots_source;
mod source_error;

pub use robots_source::RobotsSource;
pub use source_error::SourceError;
