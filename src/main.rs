use clap::Parser;
use std::process::ExitCode;

mod bank;
mod cli;
mod commands;
mod domain;
mod services;

pub use bank::{load_items, BankError};
pub use cli::{Cli, Commands, ConfigCommands};
pub use commands::response::InputError;
pub use commands::{handle_form_commands, handle_response_commands};
pub use domain::constants::{LOAD_ERROR_TEXT, THANKS_TEXT};
pub use domain::models::{
    BuildReport, FormSchema, Item, PageSummary, SubmitReport, SurveyConfig,
};
pub use services::config::{apply_overrides, load_config, ConfigError};
pub use services::envelope::EnvelopeBuilder;
pub use services::ids::probe_id_generator;
pub use services::logging::init_logging;
pub use services::output::{print_error, print_one};
pub use services::page::{render_error_page, render_host_page};
pub use services::schema::{build_survey, slugify, survey_title};
pub use services::sink::{dispatch, settle, HttpSink, Sink};
pub use services::validate::{ensure_valid, validate_items, ValidationError};

fn error_code(e: &anyhow::Error) -> &'static str {
    if e.downcast_ref::<BankError>().is_some() {
        "BANK_LOAD"
    } else if e.downcast_ref::<ConfigError>().is_some() {
        "CONFIG"
    } else if e.downcast_ref::<ValidationError>().is_some() {
        "INVALID_ITEMS"
    } else if e.downcast_ref::<InputError>().is_some() {
        "INPUT"
    } else {
        "INTERNAL"
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut cfg = load_config(cli.config.as_deref())?;
    apply_overrides(&mut cfg, cli.items.as_deref(), cli.endpoint.as_deref());

    if handle_form_commands(cli, &cfg)? {
        return Ok(());
    }
    handle_response_commands(cli, &cfg)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = error_code(&e);
            if code == "BANK_LOAD" && !cli.json {
                eprintln!("{}", LOAD_ERROR_TEXT);
            }
            print_error(cli.json, code, &e.to_string());
            ExitCode::FAILURE
        }
    }
}
