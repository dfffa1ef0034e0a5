//! Output formatting module

use std::io::Write;

use logpack_domain::constants::format_log_lengths;
use logpack_domain::LoadEstimate;
use logpack_types::{LengthError, OutputFormat, Result};
use serde::Serialize;

use crate::style::{Colorize, Role};

pub const PROMPT: &str = "Enter the length of the log (m): ";

/// JSON has no infinity, so an overflowed amount serializes as `null`
#[derive(Serialize)]
struct EstimateRecord<'a> {
    #[serde(flatten)]
    estimate: &'a LoadEstimate,
    log_amount_rounded: f64,
}

impl<'a> EstimateRecord<'a> {
    fn new(estimate: &'a LoadEstimate) -> Self {
        Self {
            estimate,
            log_amount_rounded: estimate.rounded(),
        }
    }
}

#[derive(Serialize)]
struct ErrorRecord<'a> {
    error: &'static str,
    message: String,
    input: Option<&'a str>,
}

pub fn write_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Welcome to the ATREE logging company's tooling kit for industry-standard log packing."
    )?;
    writeln!(
        out,
        "Our software is known to be robust and military-grade, much like our logs."
    )?;
    writeln!(out)?;
    writeln!(out, "LOG LENGTHS (m): {}", format_log_lengths())?;
    Ok(())
}

pub fn write_prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    Ok(())
}

pub fn write_estimate<W: Write>(
    out: &mut W,
    format: OutputFormat,
    estimate: &LoadEstimate,
    colors: &dyn Colorize,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &EstimateRecord::new(estimate))?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let line = format!("Log Amount : {}", estimate.display_amount());
            writeln!(out, "{}", colors.colorize(&line, Role::Success))?;
        }
    }
    Ok(())
}

/// `input` is the raw token when there was one
pub fn write_length_error<W: Write>(
    out: &mut W,
    format: OutputFormat,
    error: &LengthError,
    input: Option<&str>,
    colors: &dyn Colorize,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let record = ErrorRecord {
                error: error.code(),
                message: error.to_string(),
                input,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(out, "{}", colors.colorize(&error.to_string(), Role::Error))?;
        }
    }
    Ok(())
}

pub fn write_offered_loads<W: Write>(
    out: &mut W,
    format: OutputFormat,
    loads: &[LoadEstimate],
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let records: Vec<EstimateRecord> = loads.iter().map(EstimateRecord::new).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(out, "Offered Log Lengths")?;
            writeln!(out, "===================")?;
            writeln!(out, "{:>10}  {:>10}", "Length (m)", "Log Amount")?;
            for load in loads {
                writeln!(
                    out,
                    "{:>10}  {:>10}",
                    format!("{:?}", load.log_length_m),
                    load.display_amount()
                )?;
            }
        }
    }
    Ok(())
}
