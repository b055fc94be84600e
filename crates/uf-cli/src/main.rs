//! Unfence CLI
//!
//! Developer tool for validating site rule lists and probing the engine.

use std::fs;

use clap::{Parser, Subcommand};
use serde::Serialize;

use uf_compiler::{build_rule_set, default_rule_set, parse_rule_list};
use uf_core::overlay::{is_blocking_overlay, StyleSnapshot};
use uf_core::rules::RuleSet;
use uf_core::types::ResolvedPolicy;

#[derive(Parser)]
#[command(name = "uf-cli")]
#[command(about = "Unfence site rule list compiler and tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a site rule list
    Check {
        /// Rule list file
        #[arg(short, long)]
        rules: String,

        /// Print every parsed rule
        #[arg(short, long)]
        verbose: bool,
    },

    /// Resolve the policy for one or more hostnames
    Resolve {
        /// Rule list file; embedded defaults when omitted
        #[arg(short, long)]
        rules: Option<String>,

        /// Hostnames to resolve
        #[arg(required = true)]
        hostnames: Vec<String>,
    },

    /// Classify computed-style snapshots from a JSON file
    Classify {
        /// JSON array of style snapshots (camelCase keys, as captured from
        /// getComputedStyle)
        input: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { rules, verbose } => cmd_check(&rules, verbose),
        Commands::Resolve { rules, hostnames } => cmd_resolve(rules.as_deref(), &hostnames),
        Commands::Classify { input } => cmd_classify(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_check(path: &str, verbose: bool) -> Result<(), String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path, e))?;

    let rules = parse_rule_list(&content).map_err(|e| e.to_string())?;
    let set = build_rule_set(&rules);

    if verbose {
        for rule in &rules {
            println!("  {:?} -> {:?}", rule.pattern, rule.features);
        }
    }

    println!("Rule list '{}' is valid", path);
    println!("  Lines:       {}", content.lines().count());
    println!("  Rules:       {}", rules.len());
    println!("  Select/copy: {} patterns", set.select_copy.len());
    println!("  Context:     {} patterns", set.context_menu.len());
    println!("  Overlay:     {} patterns", set.overlay.len());

    Ok(())
}

#[derive(Serialize)]
struct ResolvedEntry<'a> {
    hostname: &'a str,
    #[serde(flatten)]
    policy: ResolvedPolicy,
}

fn cmd_resolve(rules_path: Option<&str>, hostnames: &[String]) -> Result<(), String> {
    let set = load_rule_set(rules_path)?;

    let entries: Vec<ResolvedEntry<'_>> = hostnames
        .iter()
        .map(|hostname| ResolvedEntry {
            hostname,
            policy: set.resolve(hostname),
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries)
        .map_err(|e| format!("Failed to serialize: {}", e))?;
    println!("{json}");

    Ok(())
}

fn cmd_classify(path: &str) -> Result<(), String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path, e))?;

    let snapshots: Vec<StyleSnapshot> = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid snapshot JSON: {}", e))?;

    let mut blocking = 0usize;
    for (index, snapshot) in snapshots.iter().enumerate() {
        let verdict = is_blocking_overlay(snapshot);
        if verdict {
            blocking += 1;
        }
        println!(
            "  [{index}] {}  (position: {}, z-index: {}, pointer-events: {})",
            if verdict { "blocking overlay" } else { "kept" },
            snapshot.position,
            snapshot.z_index,
            snapshot.pointer_events,
        );
    }

    println!();
    println!("{} of {} snapshots classified as blocking overlays", blocking, snapshots.len());

    Ok(())
}

fn load_rule_set(rules_path: Option<&str>) -> Result<RuleSet, String> {
    match rules_path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read '{}': {}", path, e))?;
            let rules = parse_rule_list(&content).map_err(|e| e.to_string())?;
            Ok(build_rule_set(&rules))
        }
        None => Ok(default_rule_set()),
    }
}
