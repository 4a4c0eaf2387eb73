//! Command line arguments

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "form-builder-tui",
    version,
    about = "Assemble text, radio and checkbox form fields in the terminal"
)]
pub struct Cli {
    /// Field types to start with, in order (text, radio, checkbox)
    #[arg(value_name = "FIELD_TYPE")]
    pub fields: Vec<String>,

    /// Tracing filter directive (overrides RUST_LOG and the config file)
    #[arg(long = "log-filter", value_name = "DIRECTIVE")]
    pub log_filter: Option<String>,
}
