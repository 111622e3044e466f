mod error;
mod model;
mod nav;
mod prompt;
mod walker;

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use log::info;
use model::{ProcedureFile, Step};
use prompt::{Prompt, TerminalPrompt};
use std::fs;
use std::io::{stdout, Write};
use walker::Walker;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let yaml_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "procedure.yaml".to_string());

    let yaml_content =
        fs::read_to_string(&yaml_path).with_context(|| format!("Failed to read {}", yaml_path))?;

    let procedure: ProcedureFile =
        serde_yaml::from_str(&yaml_content).context("Failed to parse YAML")?;

    procedure
        .validate()
        .context("YAML failed validation")?;

    let root = procedure.into_root().with_extra("source", yaml_path.as_str());
    info!("starting '{}' with {} top-level steps", root.description, root.children.len());

    let styled = stdout().is_tty();
    run(&root, TerminalPrompt, stdout().lock(), styled)
}

/// Walk `root` to the end. A quit from the user is a clean exit.
fn run<P: Prompt, W: Write>(root: &Step, prompt: P, mut out: W, styled: bool) -> Result<()> {
    let outcome = Walker::new(prompt, &mut out).styled(styled).play(root);

    match outcome {
        Ok(_) => {
            info!("procedure finished");
            Ok(())
        }
        Err(e) if e.is_quit() => {
            writeln!(out, "Quit.")?;
            Ok(())
        }
        Err(e) => Err(e).context("Procedure aborted"),
    }
}
