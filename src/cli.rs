use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tips",
    version,
    about = "Theory-in-Psychology sentiment survey: build the form, submit responses"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (TOML); defaults to ./survey.toml when present"
    )]
    pub config: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Item bank source (items.json path, directory, or http(s) url)"
    )]
    pub items: Option<String>,
    #[arg(long, global = true, help = "Submission endpoint url")]
    pub endpoint: Option<String>,
    #[arg(long, short, global = true, help = "Log debug output to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the form schema from the item bank
    Build {
        #[arg(long)]
        out: Option<String>,
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Write a host HTML page that mounts the form
    Page {
        #[arg(long)]
        out: Option<String>,
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Print the identifier slug derived from a name
    Slug { name: String },
    /// Report malformed item bank records
    Validate,
    /// Wrap collected response data in an envelope and send it
    Submit {
        #[arg(long, help = "Response data JSON file, or - for stdin")]
        data: String,
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Show,
}
