use crate::config::SheetLayout;
use crate::error::{RosterError, RosterResult};
use crate::excel::RosterReader;
use crate::summary::{RosterSummary, AGE_THRESHOLD};
use crate::types::Employee;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// The roster path must name an existing regular file
pub fn validate_file_path(path: &Path) -> RosterResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(RosterError::InvalidFilePath {
            path: path.to_path_buf(),
        })
    }
}

/// Load the layout override, or the default layout
pub fn load_layout(layout: Option<&Path>) -> RosterResult<SheetLayout> {
    match layout {
        Some(path) => SheetLayout::from_yaml_file(path),
        None => Ok(SheetLayout::default()),
    }
}

fn read(file: &Path, layout: Option<PathBuf>, verbose: bool) -> RosterResult<Vec<Employee>> {
    validate_file_path(file)?;
    let layout = load_layout(layout.as_deref())?;

    if verbose {
        println!("{}", "📖 Reading roster...".cyan());
        println!(
            "   Header rows: {}, has-children marker: {}\n",
            layout.header_rows, layout.has_children_marker
        );
    }

    RosterReader::new(file).with_layout(layout).read()
}

/// Execute the summary command
pub fn summary(file: PathBuf, layout: Option<PathBuf>, verbose: bool) -> RosterResult<()> {
    let roster = read(&file, layout, verbose)?;
    let summary = RosterSummary::from_roster(&roster);

    println!("{}", "📋 Roster Summary".bold().green());
    println!("   File: {}\n", file.display());
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &RosterSummary) {
    println!("Total employees: {}", summary.total);
    println!("Total individuals: {}", summary.individuals);
    println!("Total companies: {}", summary.companies);
    println!(
        "Total individuals under {}: {}",
        AGE_THRESHOLD, summary.individuals_under_threshold
    );

    println!("\n{}", "Names and surnames of employees:".bold());
    for name in &summary.individual_names {
        println!("{}", name);
    }
}

/// Execute the import command: roster workbook → YAML
pub fn import(
    input: PathBuf,
    output: PathBuf,
    layout: Option<PathBuf>,
    verbose: bool,
) -> RosterResult<()> {
    println!("{}", "📋 Roster Import".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    let roster = read(&input, layout, verbose)?;

    if verbose {
        for employee in &roster {
            println!("   #{} {}", employee.id(), employee.kind().label().bright_blue());
        }
        println!();
    }

    let yaml_string = serde_yaml::to_string(&roster)?;
    fs::write(&output, yaml_string)?;

    println!("{}", "✅ Import Complete!".bold().green());
    println!("   {} records written to {}\n", roster.len(), output.display());

    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
