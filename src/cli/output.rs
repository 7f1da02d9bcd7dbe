//! Terminal rendering of stock, totals and order verdicts
//!
//! Colors honor NO_COLOR, CLICOLOR and CLICOLOR_FORCE.

use std::fmt::Display;
use std::path::Path;

use colored::Colorize;

use crate::application::services::StockSummary;
use crate::domain::{FoodItem, Listable, SortedMultiset};

pub fn error(err: &dyn Display) {
    eprintln!("{}: {}", "error".red().bold(), err);
}

/// One stock row: sorted position, name, wholesale cost, retail value.
fn stock_row(index: usize, item: &FoodItem) -> String {
    format!(
        "{:>3}  {:<24} {:>6} {:>6}",
        index,
        item.name(),
        item.wholesale_cost(),
        item.retail_value()
    )
}

/// Stock listing under a header naming its file.
pub fn stock(path: &Path, stock: &SortedMultiset<FoodItem>) {
    println!("{}", path.display().to_string().cyan().bold());
    println!("  {:>3}  {:<24} {:>6} {:>6}", "#", "name", "cost", "retail");
    for (i, item) in stock.iter().enumerate() {
        println!("  {}", stock_row(i, item));
    }
}

pub fn summary(summary: &StockSummary, show_margin: bool) {
    println!("{}: {}", "items".green(), summary.items);
    println!("{}: {}", "wholesale".green(), summary.wholesale_cost);
    println!("{}: {}", "retail".green(), summary.retail_value);
    if show_margin {
        let margin = summary.margin();
        let shown = if margin < 0 {
            margin.to_string().red()
        } else {
            margin.to_string().normal()
        };
        println!("{}: {}", "margin".green(), shown);
    }
}

/// Result of `check`: the order, or the first line stock cannot cover.
pub fn availability(order: &SortedMultiset<FoodItem>, missing: Option<&FoodItem>) {
    match missing {
        None => println!("{} available: {}", "✓".green(), order),
        Some(item) => println!("{} missing: {}", "✗".red(), item),
    }
}

/// Result of `fulfil`: what was sold and what stock is left.
pub fn filled(
    order: &SortedMultiset<FoodItem>,
    sold: &StockSummary,
    remaining: &SortedMultiset<FoodItem>,
    show_margin: bool,
) {
    println!("{} filled: {}", "✓".green(), order);
    summary(sold, show_margin);
    println!("{}", "remaining".cyan().bold());
    println!("{}", remaining);
}

pub fn config_location(path: Option<&Path>, exists: bool) {
    match path {
        Some(path) => {
            let state = if exists { "exists" } else { "not found" };
            println!("{}: {} ({})", "global".green(), path.display(), state);
        }
        None => println!("{} no config directory for this platform", "✗".red()),
    }
}
