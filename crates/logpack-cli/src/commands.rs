//! Command handlers

use std::io::{BufRead, Write};
use std::path::Path;

use logpack_app::{parse_length, read_token, Config, LengthPolicy};
use logpack_domain::service::{estimate_load, offered_loads};
use logpack_domain::{LoadEstimate, TruckSpec};
use logpack_types::{ColorChoice, LengthError, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{
    write_banner, write_estimate, write_length_error, write_offered_loads, write_prompt,
};
use crate::style::{palette, Colorize};

/// Settings for one calculator run, after merging config and CLI flags
#[derive(Debug, Clone, Copy)]
pub struct CalcOptions {
    pub format: OutputFormat,
    pub banner: bool,
    pub retry: bool,
    pub policy: LengthPolicy,
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;

    let format = cli.format.unwrap_or(config.output_format);
    let colors = palette(cli.color.unwrap_or(config.color));

    let command = cli.command.unwrap_or(Commands::Calc {
        length: None,
        retry: false,
        strict: false,
    });

    match command {
        Commands::Calc {
            length,
            retry,
            strict,
        } => {
            // CLI flags can only switch these on
            let options = CalcOptions {
                format,
                banner: config.show_banner && !cli.quiet,
                retry: retry || config.retry,
                policy: LengthPolicy {
                    strict: strict || config.strict_lengths,
                },
            };
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            cmd_calc(
                &mut stdin.lock(),
                &mut stdout.lock(),
                length.as_deref(),
                &options,
                colors.as_ref(),
            )?;
            Ok(())
        }

        Commands::Lengths => {
            let stdout = std::io::stdout();
            cmd_lengths(&mut stdout.lock(), format)
        }

        Commands::Config {
            show,
            set_format,
            set_color,
            set_retry,
            set_strict,
            set_banner,
            reset,
        } => cmd_config(
            &config_path,
            config,
            show,
            set_format,
            set_color,
            set_retry,
            set_strict,
            set_banner,
            reset,
        ),
    }
}

/// Run the calculator: banner, prompt, read, validate, compute, print.
///
/// Input errors are printed and end the run with `Ok(None)` unless retry is
/// enabled, in which case the prompt repeats until a valid length is read or
/// input runs out. A length given on the command line is never retried.
pub fn cmd_calc<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    length_arg: Option<&str>,
    options: &CalcOptions,
    colors: &dyn Colorize,
) -> Result<Option<LoadEstimate>> {
    let interactive = options.format == OutputFormat::Table;

    if interactive && options.banner {
        write_banner(out)?;
    }

    if let Some(token) = length_arg {
        return report(out, token, options, colors);
    }

    loop {
        if interactive {
            write_prompt(out)?;
        }

        let Some(token) = read_token(input)? else {
            tracing::debug!("Input ended before a log length was entered");
            if interactive {
                writeln!(out)?;
            }
            let error = LengthError::MalformedInput(String::new());
            write_length_error(out, options.format, &error, None, colors)?;
            return Ok(None);
        };

        let result = report(out, &token, options, colors)?;
        if result.is_some() || !options.retry {
            return Ok(result);
        }
        tracing::debug!("Retrying after invalid input {:?}", token);
    }
}

/// Validate one token and print either the log amount or the input error
fn report<W: Write>(
    out: &mut W,
    token: &str,
    options: &CalcOptions,
    colors: &dyn Colorize,
) -> Result<Option<LoadEstimate>> {
    match parse_length(token, options.policy) {
        Ok(length) => {
            let estimate = estimate_load(length, &TruckSpec::default());
            tracing::info!(
                "{} -> {} logs ({:.3})",
                length,
                estimate.display_amount(),
                estimate.log_amount
            );
            write_estimate(out, options.format, &estimate, colors)?;
            Ok(Some(estimate))
        }
        Err(error) => {
            tracing::debug!("Rejected input {:?}: {:?}", token, error);
            write_length_error(out, options.format, &error, Some(token), colors)?;
            Ok(None)
        }
    }
}

fn cmd_lengths<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    let loads = offered_loads(&TruckSpec::default());
    write_offered_loads(out, format, &loads)
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    path: &Path,
    mut config: Config,
    show: bool,
    set_format: Option<OutputFormat>,
    set_color: Option<ColorChoice>,
    set_retry: Option<bool>,
    set_strict: Option<bool>,
    set_banner: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        println!("Config file:    {}", path.display());
        return Ok(());
    }

    let mut modified = false;

    if let Some(output_format) = set_format {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(color) = set_color {
        config.color = color;
        modified = true;
    }

    if let Some(retry) = set_retry {
        config.retry = retry;
        modified = true;
    }

    if let Some(strict) = set_strict {
        config.strict_lengths = strict;
        modified = true;
    }

    if let Some(show_banner) = set_banner {
        config.show_banner = show_banner;
        modified = true;
    }

    if modified {
        config.save_to(path)?;
        tracing::debug!("Saved config to {}", path.display());
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
        println!("Config file:    {}", path.display());
    }

    Ok(())
}
