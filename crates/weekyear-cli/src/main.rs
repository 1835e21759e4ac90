//! weekyear command-line interface

mod config;
mod logging;
mod output;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use output::OutputFormat;
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tabled::Tabled;
use weekyear_diagnostics::codes;
use weekyear_eval::{DateTimeOp, EvalError, TemplateRegistry, WeekEngine};
use weekyear_types::{CalendarDate, CalendarDateTime, DateTimeField};

/// weekyear command-line tool
#[derive(Parser)]
#[command(name = "weekyear")]
#[command(author, version, about = "ISO-8601 and MySQL mode-0 week numbers", long_about = None)]
#[command(after_help = "Dates before year 1 start with '-'; pass them after `--`, as in `weekyear week -- -0044-03-15`.")]
struct Cli {
    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    /// Engine options file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use the exact MySQL YEARWEEK(date, 0) rule instead of the legacy one
    #[arg(long, global = true)]
    strict_mysql: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show ISO and MySQL mode-0 week numbers for dates
    Week {
        /// Dates (YYYY-MM-DD; put negative years after `--`)
        #[arg(required = true)]
        dates: Vec<String>,
    },

    /// Extract a date/time field
    Field {
        /// Field name (year, month, week_of_year, day_of_week, ...)
        field: String,
        /// Date or date-time (YYYY-MM-DD[THH:MM[:SS[.fff]]]; put negative years after `--`)
        value: String,
    },

    /// Show week numbers for every day in a range
    Sweep {
        /// First day (YYYY-MM-DD; put negative years after `--`)
        from: String,
        /// Last day, inclusive (YYYY-MM-DD)
        to: String,
        /// Only show days where ISO and mode-0 numbering disagree
        #[arg(long)]
        only_diff: bool,
    },

    /// List the built-in expression templates
    Templates,

    /// Render an operator's template with operand expressions
    Render {
        /// Operator name (year, year_week, year_week_mysql, ...)
        op: String,
        /// Operand expressions substituted for {0}, {1}, ...
        args: Vec<String>,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct WeekRow {
    date: String,
    weekday: String,
    iso: String,
    iso_year_week: i64,
    mysql: String,
    mysql_year_week: i64,
}

#[derive(Debug, Serialize, Tabled)]
struct FieldRow {
    value: String,
    field: String,
    result: i32,
}

#[derive(Debug, Serialize, Tabled)]
struct TemplateRow {
    operator: String,
    template: String,
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    logging::init(cli.verbose);
    output::setup_colors(&cli.color);

    if let Err(err) = run(cli) {
        eprintln!("{}", output::format_error(&err));
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = config::load(cli.config.as_deref(), cli.strict_mysql)?;
    let engine = WeekEngine::with_options(options);

    match cli.command {
        Commands::Week { dates } => {
            let rows = dates
                .iter()
                .map(|text| parse_date(text).map(|date| week_row(&engine, date)))
                .collect::<Result<Vec<_>>>()?;
            output::print_rows(&rows, cli.format)
        }
        Commands::Field { field, value } => {
            let field: DateTimeField = field.parse().map_err(EvalError::from)?;
            let parsed = CalendarDateTime::parse(&value)
                .with_context(|| format!("Invalid date-time argument '{value}'"))?;
            let row = FieldRow {
                value: parsed.to_string(),
                field: field.to_string(),
                result: engine.extract_field(&parsed, field),
            };
            output::print_rows(&[row], cli.format)
        }
        Commands::Sweep { from, to, only_diff } => {
            let from = parse_date(&from)?;
            let to = parse_date(&to)?;
            if to < from {
                let warning = format!("{to} is before {from}; nothing to show");
                eprintln!("{}", output::format_warning(codes::EMPTY_RANGE, &warning));
            }
            log::info!("sweeping {from} through {to}");

            let rows: Vec<_> = from
                .days_through(to)
                .filter(|date| !only_diff || engine.iso_week_year(*date) != engine.mysql_week_year(*date))
                .map(|date| week_row(&engine, date))
                .collect();
            log::debug!("{} row(s)", rows.len());
            output::print_rows(&rows, cli.format)
        }
        Commands::Templates => {
            let registry = TemplateRegistry::chrono()?;
            let rows: Vec<_> = registry
                .iter()
                .map(|(op, template)| TemplateRow {
                    operator: op.to_string(),
                    template: template.to_string(),
                })
                .collect();
            output::print_rows(&rows, cli.format)
        }
        Commands::Render { op, args } => {
            let op: DateTimeOp = op.parse()?;
            if args.is_empty() {
                bail!("{op} needs at least one operand expression");
            }
            let registry = TemplateRegistry::chrono()?;
            println!("{}", registry.render(op, args.as_slice())?);
            Ok(())
        }
    }
}

fn parse_date(text: &str) -> Result<CalendarDate> {
    CalendarDate::parse(text).with_context(|| format!("Invalid date argument '{text}'"))
}

fn week_row(engine: &WeekEngine, date: CalendarDate) -> WeekRow {
    let iso = engine.iso_week_year(date);
    let mysql = engine.mysql_week_year(date);
    WeekRow {
        date: date.to_string(),
        weekday: date.weekday().to_string(),
        iso: iso.to_string(),
        iso_year_week: engine.iso_year_week(date),
        mysql: mysql.to_string(),
        mysql_year_week: engine.mysql_year_week(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("weekyear week -- -0044-03-15"), "{help}");
    }

    #[test]
    fn test_negative_years_after_separator() {
        assert!(Cli::try_parse_from(["weekyear", "week", "-0044-03-15"]).is_err());

        let cli = Cli::try_parse_from(["weekyear", "week", "--", "-0044-03-15", "2015-01-04"]).unwrap();
        let Commands::Week { dates } = cli.command else {
            panic!("expected the week command");
        };
        assert_eq!(dates, ["-0044-03-15", "2015-01-04"]);
        assert_eq!(parse_date(&dates[0]).unwrap().year(), -44);

        let cli = Cli::try_parse_from(["weekyear", "-v", "sweep", "--", "-0001-12-28", "0001-01-07"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Commands::Sweep { only_diff: false, .. }));
    }
}
