//! Command dispatch: one function per subcommand, no business logic.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use console::Term;
use jetkit::config::AnalysisConfig;
use jetkit::{bins, files, spin, AttrValue};

use super::setup::{parse_cli, Commands};
use super::styles;

pub fn run() -> Result<()> {
    let cli = parse_cli();
    match cli.command {
        Commands::Find {
            root,
            pattern,
            progress,
        } => cmd_find(&root, &pattern, progress, cli.json),
        Commands::Bins {
            min,
            max,
            count,
            log,
        } => cmd_bins(min, max, count, log, cli.json),
        Commands::Config { file, observable } => {
            cmd_config(&file, observable.as_deref(), cli.json)
        }
    }
}

fn cmd_find(root: &Path, pattern: &str, progress: bool, json: bool) -> Result<()> {
    let found = if progress {
        let mut term = Term::stderr();
        let found = files::find_files_observed(root, pattern, |_| {
            let _ = spin::tick_to(&mut term);
        })?;
        let _ = term.clear_line();
        found
    } else {
        files::find_files(root, pattern)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }
    for path in &found {
        println!("{}", path.display());
    }
    eprintln!(
        "{}",
        styles::MUTED.apply_to(format!("{} files", found.len()))
    );
    Ok(())
}

fn cmd_bins(min: f64, max: f64, count: usize, log: bool, json: bool) -> Result<()> {
    let edges = if log {
        bins::log_bins(min, max, count)?
    } else {
        bins::lin_bins(min, max, count)?
    };

    if json {
        println!("{}", serde_json::to_string(&edges)?);
        return Ok(());
    }
    let rendered: Vec<String> = edges.iter().map(|e| e.to_string()).collect();
    println!("{}", rendered.join(" "));
    Ok(())
}

fn cmd_config(file: &Path, observable: Option<&str>, json: bool) -> Result<()> {
    let config = AnalysisConfig::load(file)
        .with_context(|| format!("reading {}", file.display()))?;

    if let Some(key) = observable {
        let bag = config
            .observable(key)
            .ok_or_else(|| anyhow!("no observable block '{key}' in {}", file.display()))??;
        if json {
            let rendered: serde_json::Map<String, serde_json::Value> = bag
                .iter()
                .map(|(k, v)| (k.to_string(), attr_to_json(v)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        } else {
            println!("{bag}");
        }
        return Ok(());
    }

    let system = if config.is_pp() { "pp" } else { "Pb-Pb" };
    if json {
        let summary = serde_json::json!({
            "system": system,
            "figure_approval_status": config.figure_approval_status,
            "jet_matching_distance": config.jet_matching_distance,
            "use_prev_prelim": config.use_prev_prelim,
            "max_distance": config.max_distances(),
            "observables": config.observables.keys().collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let label = |name: &str| styles::MUTED.apply_to(format!("{name}:"));
    println!("{} {}", label("system"), styles::TITLE.apply_to(system));
    println!("{} {}", label("approval"), config.figure_approval_status);
    println!(
        "{} {}",
        label("jet matching distance"),
        config.jet_matching_distance
    );
    println!(
        "{} {}",
        label("use previous preliminary"),
        config.use_prev_prelim
    );
    if !config.is_pp() {
        let distances: Vec<String> = config
            .max_distances()
            .iter()
            .map(|d| d.to_string())
            .collect();
        println!("{} {}", label("R_max"), distances.join(" "));
    }
    if !config.observables.is_empty() {
        let keys: Vec<&str> = config.observables.keys().map(String::as_str).collect();
        println!("{} {}", label("observables"), keys.join(" "));
    }
    Ok(())
}

fn attr_to_json(value: &AttrValue) -> serde_json::Value {
    match value {
        AttrValue::Float(v) => serde_json::json!(v),
        AttrValue::Int(v) => serde_json::json!(v),
        AttrValue::Str(s) => serde_json::json!(s),
        AttrValue::Bool(v) => serde_json::json!(v),
        AttrValue::List(items) | AttrValue::Tuple(items) => {
            serde_json::Value::Array(items.iter().map(attr_to_json).collect())
        }
        AttrValue::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), attr_to_json(v)))
                .collect(),
        ),
    }
}
