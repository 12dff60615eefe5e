use anyhow::Context;
use clap::{Parser, Subcommand};
use fs_err as fs;
use metalint_rules::RuleEngine;
use std::process::Command as ProcessCommand;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Bless golden fixtures (overwrite expected outputs).
    BlessFixtures,
    /// Write the built-in rule table as markdown.
    RulesDoc {
        #[arg(long, default_value = "docs/rules.md")]
        out: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::BlessFixtures => {
            let status = ProcessCommand::new("cargo")
                .args(["test", "-p", "metalint-rules", "--test", "golden_fixtures"])
                .env("METALINT_BLESS", "1")
                .status()
                .context("run golden fixture blessing")?;
            if !status.success() {
                anyhow::bail!("bless-fixtures failed");
            }
        }
        Command::RulesDoc { out } => {
            let metas: Vec<_> = RuleEngine::new().enabled().map(|rule| rule.meta()).collect();
            let table = metalint_render::render_rules_md(&metas);
            if let Some(parent) = std::path::Path::new(&out).parent() {
                fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
            }
            fs::write(&out, format!("# Rules\n\n{table}")).with_context(|| format!("write {out}"))?;
            println!("wrote {out}");
        }
    }
    Ok(())
}
