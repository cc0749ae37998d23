/// Knobs for a parse call.
///
/// The grammar itself has no backpressure, so callers handling untrusted
/// input can cap the source size up front; oversized input is rejected
/// before any tokenizing happens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub max_text_size: Option<usize>,
}

impl ParserConfig {
    pub fn with_max_text_size(size: usize) -> ParserConfig {
        ParserConfig {
            max_text_size: Some(size),
        }
    }
}
