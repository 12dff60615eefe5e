mod explain;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use metalint_core::adapters::{FsFixPort, StdoutOutput};
use metalint_core::{run_lint, LintSettings, RunMode, ShellGitPort};
use metalint_render::render_rules_md;
use metalint_rules::{builtin_rules, RuleMeta};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "metalint",
    version,
    about = "Metadata and license-header consistency checks for JavaScript monorepos."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    /// Report only: never write fixes.
    #[arg(long, default_value_t = false)]
    ci: bool,

    /// Directory to search the project root from (default: current directory).
    #[arg(long, default_value = ".")]
    cwd: Utf8PathBuf,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all rules in evaluation order.
    ListRules(ListRulesArgs),
    /// Explain what a rule checks and how to fix its violations.
    Explain(ExplainArgs),
}

#[derive(Debug, Parser)]
struct ListRulesArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Parser)]
struct ExplainArgs {
    /// Rule key or diagnostic code (e.g., "pkg/normalize", "[deps/external]").
    rule: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<u8> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        None => cmd_lint(cli.cwd, cli.ci),
        Some(Command::ListRules(args)) => cmd_list_rules(args).map(|()| 0),
        Some(Command::Explain(args)) => cmd_explain(args).map(|()| 0),
    }
}

fn cmd_lint(cwd: Utf8PathBuf, ci: bool) -> anyhow::Result<u8> {
    let settings = LintSettings {
        cwd,
        mode: if ci { RunMode::Ci } else { RunMode::Fix },
    };
    debug!(?settings, "starting lint");

    let mut output = StdoutOutput;
    let outcome = run_lint(&settings, &ShellGitPort, &mut output, &FsFixPort)
        .with_context(|| format!("lint {}", settings.cwd))?;
    Ok(outcome.exit_code())
}

fn cmd_list_rules(args: ListRulesArgs) -> anyhow::Result<()> {
    let metas: Vec<RuleMeta> = builtin_rules().iter().map(|r| r.meta()).collect();

    match args.format {
        OutputFormat::Text => {
            println!("Available rules:\n");
            println!("  {:<28} {:<30} TITLE", "RULE", "CODE");
            println!("  {:<28} {:<30} -----", "----", "----");
            for meta in &metas {
                println!("  {:<28} {:<30} {}", meta.id, meta.code, meta.title);
            }
            println!();
            println!("Use 'metalint explain <rule>' for details.");
        }
        OutputFormat::Json => {
            let rules: Vec<_> = metas
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "id": m.id,
                        "code": m.code,
                        "title": m.title,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&rules).context("serialize rules")?
            );
        }
        OutputFormat::Markdown => print!("{}", render_rules_md(&metas)),
    }
    Ok(())
}

fn cmd_explain(args: ExplainArgs) -> anyhow::Result<()> {
    use explain::{format_fixable, list_rule_keys, lookup_rule};

    let Some(rule) = lookup_rule(&args.rule) else {
        let available = list_rule_keys().join(", ");
        anyhow::bail!(
            "Unknown rule: '{}'\n\nAvailable rules: {}",
            args.rule,
            available
        );
    };

    println!("================================================================================");
    println!("RULE: {}", rule.title);
    println!("================================================================================");
    println!();
    println!("Key:      {}", rule.key);
    println!("Code:     {}", rule.code);
    println!("Fixable:  {}", format_fixable(rule.fixable));
    println!();

    println!("DESCRIPTION");
    println!("--------------------------------------------------------------------------------");
    println!("{}", rule.description);
    println!();

    println!("REMEDIATION");
    println!("--------------------------------------------------------------------------------");
    println!("{}", rule.remediation);

    Ok(())
}
