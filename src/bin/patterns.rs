use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use design_patterns::catalog::{Catalog, Showcase};
use design_patterns::config::DemoConfig;
use design_patterns::logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Run design pattern showcases")]
struct Cli {
    /// TOML file overriding the showcase defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every showcase
    List {
        #[arg(long)]
        json: bool,
    },
    /// Run showcases by name
    Run(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    names: Vec<String>,

    #[arg(long)]
    all: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "patterns failed");
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> design_patterns::Result<()> {
    let config = DemoConfig::load_or_default(cli.config.as_deref())?;
    if !config.color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let catalog = Catalog::new();
    match cli.command {
        Command::List { json: true } => println!("{}", catalog.to_json()?),
        Command::List { json: false } => list(&catalog),
        Command::Run(args) => {
            let selected: Vec<&Showcase> = if args.all {
                catalog.iter().collect()
            } else {
                args.names
                    .iter()
                    .map(|name| catalog.find(name))
                    .collect::<design_patterns::Result<_>>()?
            };
            for showcase in selected {
                print_showcase(showcase, &config)?;
            }
        }
    }
    Ok(())
}

fn list(catalog: &Catalog) {
    let width = catalog.iter().map(|s| s.name.len()).max().unwrap_or_default();
    for showcase in catalog.iter() {
        println!(
            "{}  {}  {}",
            format!("{:<width$}", showcase.name).bold(),
            format!("{:<10}", showcase.family).cyan(),
            showcase.summary
        );
    }
}

fn print_showcase(showcase: &Showcase, config: &DemoConfig) -> design_patterns::Result<()> {
    let lines = showcase.run(config)?;
    println!("{} {}", "==".green(), showcase.name.bold().green());
    for line in lines {
        println!("{line}");
    }
    println!();
    Ok(())
}
