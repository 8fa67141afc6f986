use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use tsk::commands::{delete, start};

const AFTER_HELP: &str = "\
Examples:
  tsk MY_TASK     start a task (asks before creating a new branch)
  tsk             list and choose from all tasks
  tsk MY          list tasks containing a string, or switch directly if
                  there is exactly one match; the search is smart case
                  (case sensitive only when the term has an uppercase letter)
  tsk delete foo  delete the task 'foo', or all tasks containing 'foo'
                  (asks for confirmation)
  tsk delete      pick a task to delete from a list";

#[derive(Parser)]
#[command(name = "tsk")]
#[command(about = "Map a short, fuzzy search term to a git task branch")]
#[command(version)]
#[command(after_help = AFTER_HELP)]
#[command(disable_help_subcommand = true)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search term: switches to the matching task or creates a new one
    term: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete a task, all tasks matching a search term, or pick from a list
    Delete {
        /// Exact branch name or fuzzy search term
        term: Option<String>,
    },

    /// Print the tool version
    #[command(visible_alias = "v")]
    Version,

    /// Print usage text
    #[command(visible_alias = "h")]
    Help,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", format!("{err:#}").red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Delete { term }) => delete::execute(term.as_deref()),
        Some(Commands::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Commands::Help) => {
            Cli::command().print_long_help()?;
            Ok(())
        }
        None => start::execute(cli.term.as_deref()),
    }
}
