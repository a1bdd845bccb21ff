//! Internal implementation for init command

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use docs_portal::config::Config;
use docs_portal::report;
use docs_portal::scaffold::{Action, Plan, Scaffolder};
use docs_portal::structure;

use super::InitOptions;

/// Main execution logic for init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config =
        Config::load(options.config.as_deref(), &cwd).context("Failed to load configuration")?;

    let (root, scaffolder) = resolve(&options, config);
    let project = scaffolder.branding().project.clone();

    if options.dry_run {
        let plan = scaffolder
            .plan(&root)
            .with_context(|| format!("Failed to inspect {}", root.display()))?;
        print_plan(&plan, options.json)?;
        return Ok(());
    }

    tracing::info!(root = %root.display(), project = %project, "initializing documentation tree");
    let created = scaffolder
        .initialize(&root)
        .with_context(|| format!("Failed to initialize documentation tree at {}", root.display()))?;

    if options.json {
        let summary = InitSummary {
            root: &root,
            project: &project,
            created,
            total: structure::file_count(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        report::report(&project, created);
    }

    Ok(())
}

#[derive(Serialize)]
struct InitSummary<'a> {
    root: &'a Path,
    project: &'a str,
    created: usize,
    total: usize,
}

/// CLI flags win over the config file
fn resolve(options: &InitOptions, config: Config) -> (PathBuf, Scaffolder) {
    let root = options
        .root
        .clone()
        .unwrap_or_else(|| config.project.root.clone());

    let mut branding = config.branding();
    if let Some(name) = &options.project {
        branding.project = name.clone();
    }

    (root, Scaffolder::new(branding))
}

fn print_plan(plan: &Plan, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    println!("📋 Dry run for {}", plan.root.display());
    for entry in &plan.files {
        match entry.action {
            Action::Create => println!("  + {}", entry.path.display()),
            Action::Skip => println!("  = {} (exists)", entry.path.display()),
        }
    }
    println!(
        "\n{} to create, {} already present",
        plan.to_create(),
        plan.to_skip()
    );
    Ok(())
}
