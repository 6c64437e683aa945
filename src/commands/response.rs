use crate::*;
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, error};

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("failed to read response data {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("response data {path} is not valid JSON: {reason}")]
    Parse { path: String, reason: String },
    #[error("response data {path} must be a JSON object")]
    NotObject { path: String },
}

fn read_response_data(path: &str) -> Result<serde_json::Value, InputError> {
    let read_err = |e: std::io::Error| InputError::Read {
        path: path.to_string(),
        reason: e.to_string(),
    };
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(read_err)?
    };
    let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| InputError::Parse {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    if !value.is_object() {
        return Err(InputError::NotObject {
            path: path.to_string(),
        });
    }
    Ok(value)
}

fn config_rows(c: &SurveyConfig) -> String {
    format!(
        "endpoint: {}\nsurvey_year: {}\ninstrument_version: {}\nitems: {}\nstrict: {}",
        c.endpoint, c.survey_year, c.instrument_version, c.items, c.strict
    )
}

pub fn handle_response_commands(cli: &Cli, cfg: &SurveyConfig) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Submit { data, dry_run } => {
            let data = read_response_data(data)?;
            let builder = EnvelopeBuilder::new(cfg.meta(), probe_id_generator());
            let envelope = builder.build(data);
            debug!(
                response_id = envelope.response_id(),
                ids = builder.id_kind(),
                "built envelope"
            );

            if *dry_run {
                print_one(cli.json, &envelope, |e| {
                    serde_json::to_string_pretty(e).unwrap_or_default()
                })?;
                return Ok(true);
            }

            let handle = match HttpSink::new(&cfg.endpoint) {
                Ok(sink) => {
                    let sink: Arc<dyn Sink> = Arc::new(sink);
                    Some(dispatch(sink, envelope.clone()))
                }
                Err(err) => {
                    error!(error = %err, "submission failed: could not create http client");
                    None
                }
            };

            let report = SubmitReport {
                response_id: envelope.response_id().to_string(),
                submitted_at: envelope.submitted_at().to_string(),
                endpoint: cfg.endpoint.clone(),
                dispatched: handle.is_some(),
                message: THANKS_TEXT.to_string(),
            };
            print_one(cli.json, report, |r| r.message.clone())?;

            if let Some(h) = handle {
                settle(h);
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                print_one(cli.json, cfg.clone(), config_rows)?;
            }
        },
        _ => return Ok(false),
    }
    Ok(true)
}
