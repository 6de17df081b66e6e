//! CLI command dispatch.
//!
//! The query command gates its input with `DateKey::validate` before
//! anything touches the data files, then renders the formatted result
//! to stdout (text report or JSON).

use std::path::Path;

use crate::config::Config;
use crate::date::DateKey;
use crate::format::{self, FormattedResult};
use crate::query;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatches one parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Query {
            date,
            config,
            data_dir,
            json,
        } => query_command(&date, &config, data_dir.as_deref(), json),
        Command::Validate { date } => validate_command(&date),
    }
}

fn query_command(
    date: &str,
    config_path: &Path,
    data_dir: Option<&Path>,
    json: bool,
) -> CliResult<()> {
    if !DateKey::validate(date) {
        return Err(CliError::invalid_date(date));
    }

    let config = Config::load(config_path)?;
    let dataset = config.dataset(data_dir);
    let result = query::run_query(&dataset, date)?;
    let formatted = format::format_result(&result);

    if json {
        let rendered = serde_json::to_string_pretty(&formatted).map_err(CliError::Render)?;
        println!("{}", rendered);
    } else {
        print_report(&formatted);
    }
    Ok(())
}

fn validate_command(date: &str) -> CliResult<()> {
    if DateKey::validate(date) {
        println!("{} is a valid YYYY-MM-DD date", date);
        Ok(())
    } else {
        Err(CliError::invalid_date(date))
    }
}

fn print_report(result: &FormattedResult) {
    println!("date:                {}", result.date);
    println!("items sold:          {}", result.items_sold);
    println!("unique customers:    {}", result.num_customers);
    println!("total discount:      {}", result.total_discount);
    println!("avg discount rate:   {}", result.avg_discount_rate);
    println!("avg order total:     {}", result.avg_total);
    println!("total commission:    {}", result.total_commission);
    println!("avg commission:      {}", result.avg_commission);
    println!("commission per promotion:");
    if result.total_commission_per_promotion.is_empty() {
        println!("  (none)");
    }
    for (promotion, amount) in &result.total_commission_per_promotion {
        println!("  {}: {}", promotion, amount);
    }
}
