mod settings;

pub use settings::{CliConfig, InputConfig, OutputConfig, OutputFormat};
