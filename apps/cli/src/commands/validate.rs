use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use stockroom_validator::field::FormSpec;
use stockroom_validator::form::{FieldSet, InlineMessages, attach};

use crate::cli::OutputFormat;
use crate::output;
use crate::settings::Settings;

/// Validates every field of a form file as a submit would.
pub fn run(path: &Path, settings: &Settings) -> anyhow::Result<ExitCode> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read form file {}", path.display()))?;
    let spec: FormSpec =
        toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    let form = FieldSet::from_spec(&spec)
        .with_context(|| format!("invalid field constraints in {}", path.display()))?;

    tracing::debug!(path = %path.display(), fields = form.fields().len(), "form loaded");

    let mut attached = attach(form, InlineMessages::new(), settings.validation);
    let report = attached.submit().into_report();

    match settings.output {
        OutputFormat::Text => print!("{}", output::report_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
