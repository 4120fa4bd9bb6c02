mod directive_set;
mod directive_table;
mod header_tokenizer;
mod meta_tokenizer;

pub use directive_set::DirectiveSet;
pub use directive_table::DirectiveTable;
pub use header_tokenizer::{ROBOTS_TAG_MARKER, WILDCARD_AGENT, tokenize_header};
pub use meta_tokenizer::{ROBOTS_AGENT, tokenize_meta_content};

pub(crate) use header_tokenizer::starts_with_marker;
