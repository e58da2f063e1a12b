mod schema;

pub use schema::{Config, OutputConfig, OutputFormat, PathsConfig, ReferenceConfig};
