//! CLI for greeting names and reversing text.
//!
//! ## Usage
//!
//! ```bash
//! # Greet someone
//! su greet Alice
//!
//! # Reverse text
//! su reverse "hello"
//! echo "hello" | su reverse -
//!
//! # Generate shell completions
//! source <(COMPLETE=bash su)
//! su --completions zsh > ~/.zfunc/_su
//! ```

use std::io::{self, IsTerminal, Read};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use color_eyre::eyre::{Result, WrapErr, bail};
use tracing::debug;

use string_utils::{greet, reverse_string};

/// Greet names and reverse text
#[derive(Parser, Debug)]
#[command(name = "su", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Generate a static completion script for SHELL and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a greeting for NAME
    Greet {
        /// Name to greet; must contain at least one non-whitespace character
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Print TEXT with its characters in reverse order
    Reverse {
        /// Text to reverse (use "-" or pipe to read from stdin)
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: Option<String>,
    },
}

const AFTER_HELP: &str = "\
SHELL COMPLETIONS:
  Bash (~/.bashrc):
    source <(COMPLETE=bash su)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh su)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish su | source

EXAMPLES:
  su greet Alice              # Hello, Alice!
  su reverse hello            # olleh
  echo hello | su reverse -   # olleh
";

fn main() -> Result<()> {
    color_eyre::install()?;

    if let Ok(shell_name) = std::env::var("COMPLETE") {
        return generate_completions_by_name(&shell_name);
    }

    // Setup logging if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    match cli.command {
        Some(Command::Greet { name }) => match greet(&name) {
            Ok(greeting) => println!("{greeting}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Some(Command::Reverse { text }) => {
            let text = get_text(text.as_deref())?;
            debug!(chars = text.chars().count(), "reversing input");
            println!("{}", reverse_string(&text));
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}

/// Get text to reverse from the positional arg or stdin.
fn get_text(arg: Option<&str>) -> Result<String> {
    match arg {
        Some("-") => read_from_stdin(),
        Some(text) => Ok(text.to_string()),
        None if !io::stdin().is_terminal() => read_from_stdin(),
        None => bail!("No text provided. Use a positional argument or pipe to stdin."),
    }
}

/// Read all of stdin, dropping a single trailing line ending.
fn read_from_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .wrap_err("Failed to read from stdin")?;

    Ok(strip_trailing_newline(content))
}

/// Removes one trailing `\n` or `\r\n`; interior line endings are kept as-is.
fn strip_trailing_newline(mut content: String) -> String {
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    content
}

fn generate_completions_by_name(shell_name: &str) -> Result<()> {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => bail!("Unknown shell: {shell_name}. Supported: bash, zsh, fish, powershell, elvish"),
    };

    generate_completions(shell);
    Ok(())
}

fn generate_completions(shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "su", &mut io::stdout());
}
