//! Subcommand implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use dimap_match::{Algorithm, automap};
use dimap_model::{MappingProposal, MatchConfig, SourceHeader, TargetHeader, visible};

use crate::cli::AutomapArgs;

/// Prints the algorithm registry (id and display name).
pub fn run_algorithms() {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Algorithm"]);
    apply_table_style(&mut table);
    for algorithm in Algorithm::ALL {
        table.add_row(vec![algorithm.id(), algorithm.display_name()]);
    }
    println!("{table}");
}

/// Loads both header lists, runs the automapper, and prints the proposal.
pub fn run_automap(args: &AutomapArgs) -> Result<()> {
    let targets = load_targets(&args.targets)?;
    let sources = load_sources(&args.sources)?;
    info!(
        targets = targets.len(),
        sources = sources.len(),
        "loaded headers"
    );

    let config = MatchConfig::new(args.algorithm.clone())
        .with_similarity_threshold(args.threshold)
        .with_match_limit(args.limit)
        .with_alternative_names(args.alternatives);
    let proposal = automap(&targets, &sources, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&proposal)?);
    } else {
        print_proposal(&proposal);
    }

    let unmatched = proposal.unmatched_targets();
    if !unmatched.is_empty() {
        info!(
            count = unmatched.len(),
            targets = ?unmatched,
            "targets without a qualifying source"
        );
    }
    Ok(())
}

fn load_targets(path: &Path) -> Result<Vec<TargetHeader>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read target headers from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parse target headers from {}", path.display()))
}

/// Reads source headers from JSON, a CSV header row, or plain lines,
/// keyed off the file extension.
fn load_sources(path: &Path) -> Result<Vec<SourceHeader>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read source headers from {}", path.display()))?;
            let headers: Vec<SourceHeader> = serde_json::from_str(&raw)
                .with_context(|| format!("parse source headers from {}", path.display()))?;
            Ok(visible(&headers))
        }
        Some("csv") => {
            let mut reader = csv::Reader::from_path(path)
                .with_context(|| format!("open {}", path.display()))?;
            let row = reader
                .headers()
                .with_context(|| format!("read header row from {}", path.display()))?;
            Ok(row.iter().map(SourceHeader::new).collect())
        }
        _ => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read source headers from {}", path.display()))?;
            Ok(parse_source_lines(&raw))
        }
    }
}

fn parse_source_lines(raw: &str) -> Vec<SourceHeader> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(SourceHeader::new)
        .collect()
}

fn print_proposal(proposal: &MappingProposal) {
    let mut table = Table::new();
    table.set_header(vec!["Target", "Matched sources"]);
    apply_table_style(&mut table);
    for (target, matches) in proposal.iter() {
        table.add_row(vec![target.to_string(), matches.join(", ")]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_lines_skipping_blanks() {
        let headers = parse_source_lines("firstname\n\n  lastname  \n");
        let names: Vec<_> = headers.into_iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["firstname", "lastname"]);
    }
}
