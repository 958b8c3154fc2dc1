//! Console calculator
//!
//! Run without arguments for the interactive menu, or pass an operation and
//! two numbers: `calc eval divide 9 4`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};

mod calc;

use calc::{Calculation, Operation};

#[derive(Parser)]
#[command(name = "calc")]
#[command(about = "Simple four-operation calculator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute one result and exit
    Eval {
        #[arg(value_enum)]
        operation: Operation,

        #[arg(allow_negative_numbers = true)]
        a: f64,

        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Eval { operation, a, b }) => {
            print_outcome(Some(operation), a, b);
            Ok(())
        }
        None => run_interactive(&Term::stdout()),
    }
}

fn run_interactive(term: &Term) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!("{}", "=== Simple Calculator ===".bright_cyan().bold());
    for (i, op) in Operation::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, op.label());
    }

    let choice: String = Input::with_theme(&theme)
        .with_prompt("Choose operation (1-4)")
        .allow_empty(true)
        .interact_text_on(term)?;

    // Non-numeric input is re-prompted by dialoguer
    let a: f64 = Input::with_theme(&theme)
        .with_prompt("Enter first number")
        .interact_text_on(term)?;
    let b: f64 = Input::with_theme(&theme)
        .with_prompt("Enter second number")
        .interact_text_on(term)?;

    print_outcome(Operation::from_choice(&choice), a, b);
    Ok(())
}

fn print_outcome(operation: Option<Operation>, a: f64, b: f64) {
    let Some(operation) = operation else {
        println!("{}", "Invalid choice!".red());
        return;
    };

    match Calculation::run(operation, a, b) {
        Ok(calc) => println!("{} {}", "Result:".bright_green().bold(), calc),
        Err(e) => println!("{}", format!("Error: {}", e).red()),
    }
}
