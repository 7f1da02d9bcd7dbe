//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::code;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::ServiceContainer;

/// Run the parsed command, returning the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Show { stock }) => cmd_show(&container, stock.as_deref()),
        Some(Commands::Totals { stock }) => cmd_totals(&container, stock.as_deref()),
        Some(Commands::Check { order, stock }) => cmd_check(&container, order, stock.as_deref()),
        Some(Commands::Fulfil { order, stock }) => {
            cmd_fulfil(&container, order, stock.as_deref())
        }
        Some(Commands::Config { command }) => cmd_config(&container, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(code::OK)
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|source| CliError::Terminal {
                    action: "print help",
                    source,
                })?;
            Ok(code::OK)
        }
    }
}

fn stock_path(container: &ServiceContainer, stock: Option<&Path>) -> PathBuf {
    stock
        .map(Path::to_path_buf)
        .unwrap_or_else(|| container.settings.stock_file.clone())
}

#[instrument(level = "debug", skip(container))]
fn cmd_show(container: &ServiceContainer, stock: Option<&Path>) -> CliResult<i32> {
    let path = stock_path(container, stock);
    let stock = container.inventory.load(&path)?;
    output::stock(&path, &stock);
    Ok(code::OK)
}

#[instrument(level = "debug", skip(container))]
fn cmd_totals(container: &ServiceContainer, stock: Option<&Path>) -> CliResult<i32> {
    let stock = container.inventory.load(&stock_path(container, stock))?;
    let summary = container.inventory.summarize(&stock);
    output::summary(&summary, container.settings.show_margin);
    Ok(code::OK)
}

#[instrument(level = "debug", skip(container))]
fn cmd_check(container: &ServiceContainer, order: &Path, stock: Option<&Path>) -> CliResult<i32> {
    let stock = container.inventory.load(&stock_path(container, stock))?;
    let order = container.inventory.load(order)?;
    let missing = stock.first_missing(&order);
    output::availability(&order, missing.map(|item| item.as_ref()));
    Ok(if missing.is_none() { code::OK } else { code::SHORT })
}

#[instrument(level = "debug", skip(container))]
fn cmd_fulfil(container: &ServiceContainer, order: &Path, stock: Option<&Path>) -> CliResult<i32> {
    let mut stock = container.inventory.load(&stock_path(container, stock))?;
    let order = container.inventory.load(order)?;
    let sold = container.inventory.fulfil(&mut stock, &order)?;
    output::filled(&order, &sold, &stock, container.settings.show_margin);
    Ok(code::OK)
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => println!("{}", container.settings.to_toml()?),
        ConfigCommands::Template => println!("{}", Settings::template()),
        ConfigCommands::Path => {
            let path = global_config_path();
            let exists = path
                .as_deref()
                .map(|p| container.reader.exists(p))
                .unwrap_or(false);
            output::config_location(path.as_deref(), exists);
        }
    }
    Ok(code::OK)
}
