//! Guide generator CLI.
//!
//! Renders the markdown guide from the builtin catalog through a MiniJinja
//! template. The `--check` mode fails when the on-disk guide no longer
//! matches the catalog data, so the generated document cannot drift.

mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use catalog::io::store::builtin_catalog;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "guidegen")]
#[command(about = "Render the conditional-pattern guide from catalog data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the guide to a markdown file
    Render {
        /// Output path (default: GUIDE.md next to templates/)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Fail instead of writing when the output is stale
        #[arg(long)]
        check: bool,
    },

    /// List available templates
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let root = find_guide_root()?;

    match cli.command {
        Commands::Render { out, check } => {
            let out = out.unwrap_or_else(|| root.join("GUIDE.md"));
            render_guide_file(&root, &out, check)?;
        }
        Commands::List => list_templates(&root)?,
    }

    Ok(())
}

/// Find the guidegen root directory (where templates/ lives).
fn find_guide_root() -> Result<PathBuf> {
    // First check compile-time manifest directory (most reliable)
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    if manifest_dir.join("templates").exists() {
        return Ok(manifest_dir);
    }

    // Check cwd and relative paths
    let cwd = std::env::current_dir().ok();
    let candidates = [
        cwd.clone(),
        cwd.as_ref().map(|p| p.join("catalog/guidegen")),
        cwd.as_ref().map(|p| p.join("guidegen")),
    ];

    for candidate in candidates.into_iter().flatten() {
        if candidate.join("templates").exists() {
            return Ok(candidate);
        }
    }

    bail!("no templates/ directory found from {}", manifest_dir.display())
}

fn render_guide_file(root: &Path, out: &Path, check: bool) -> Result<()> {
    let template_path = root.join("templates").join("guide.md.j2");
    let catalog = builtin_catalog()?;
    let rendered = render::render_guide(&template_path, &catalog)?;

    if check {
        let existing = fs::read_to_string(out)
            .with_context(|| format!("read existing guide {}", out.display()))?;
        if render::content_hash(&existing) != render::content_hash(&rendered) {
            bail!("guide is stale: {} does not match catalog data", out.display());
        }
        info!(out = %out.display(), "guide up to date");
        return Ok(());
    }

    fs::write(out, &rendered).with_context(|| format!("write guide {}", out.display()))?;
    info!(out = %out.display(), hash = %render::content_hash(&rendered), "guide written");
    Ok(())
}

/// List template files under templates/, relative paths, sorted.
fn list_templates(root: &Path) -> Result<()> {
    let templates_dir = root.join("templates");
    for entry in WalkDir::new(&templates_dir).sort_by_file_name() {
        let entry = entry.context("walk templates")?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "j2")
        {
            let rel = entry
                .path()
                .strip_prefix(&templates_dir)
                .context("strip templates prefix")?;
            println!("{}", rel.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_render_check() {
        let cli = Cli::parse_from(["guidegen", "render", "--check"]);
        assert!(matches!(
            cli.command,
            Commands::Render { out: None, check: true }
        ));
    }

    #[test]
    fn parse_render_out() {
        let cli = Cli::parse_from(["guidegen", "render", "--out", "docs/guide.md"]);
        assert!(
            matches!(cli.command, Commands::Render { out: Some(path), check: false } if path == PathBuf::from("docs/guide.md"))
        );
    }
}
