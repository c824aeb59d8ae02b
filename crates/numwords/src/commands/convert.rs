//! Convert command: render numbers as words.

use anyhow::bail;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use numwords_core::{Config, ConversionOptions, ConversionReport, Style, convert};

use super::read_stdin_values;

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Numbers to convert (read from stdin when omitted).
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Rendering style (overrides the configured style).
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Shorthand for `--style british`.
    #[arg(long, conflicts_with = "style")]
    pub british: bool,

    /// Insert "and" after hundreds and before small remainders.
    #[arg(long)]
    pub ands: bool,

    /// Insert commas after thousand-and-larger segments.
    #[arg(long)]
    pub commas: bool,

    /// Fail if any value is not a finite number.
    #[arg(long)]
    pub strict: bool,
}

impl ConvertArgs {
    /// Resolve rendering options from flags, falling back to `config`.
    ///
    /// An explicit style replaces the configured one; `--ands` and `--commas`
    /// add to whichever style applies.
    pub const fn options(&self, config: &Config) -> ConversionOptions {
        let style = if self.british {
            Some(Style::British)
        } else {
            self.style
        };
        let base = match style {
            Some(style) => style.options(),
            None => config.conversion_options(),
        };
        base.with_and(base.use_and || self.ands)
            .with_commas(base.use_commas || self.commas)
    }
}

/// Convert each value to words and print the results.
#[instrument(name = "cmd_convert", skip_all, fields(count = args.values.len()))]
pub fn cmd_convert(args: ConvertArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let options = args.options(config);
    debug!(?options, strict = args.strict, "executing convert command");

    let values = if args.values.is_empty() {
        read_stdin_values()?
    } else {
        args.values
    };

    let reports: Vec<ConversionReport> = values
        .iter()
        .map(|value| convert(value, options))
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            if report.is_sentinel() {
                println!(
                    "{}",
                    report
                        .words
                        .if_supports_color(Stream::Stdout, |words| words.yellow())
                );
            } else {
                println!("{}", report.words);
            }
        }
    }

    if args.strict {
        let rejected: Vec<&str> = reports
            .iter()
            .filter(|report| report.is_sentinel())
            .map(|report| report.input.as_str())
            .collect();
        if !rejected.is_empty() {
            bail!(
                "{} value(s) could not be converted: {}",
                rejected.len(),
                rejected.join(", ")
            );
        }
    }

    Ok(())
}
