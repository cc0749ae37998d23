mod config;
pub use config::ParserConfig;

mod error;
pub use error::{ParseError, Pos};

mod schema;
pub use schema::{parse, parse_with_config, HTTP_METHODS};
