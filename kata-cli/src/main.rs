//! Kata CLI - run the exercises from the command line
//!
//! Usage:
//!   kata selector <TOKENS>...          Build a CSS selector and print it
//!   kata zigzag <N>                    Print the N×N zigzag matrix
//!   kata rect <WIDTH> <HEIGHT>         Print a rectangle's area
//!   kata rect --from-json <JSON>       Read a rectangle from JSON

mod selector_args;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kata_objects::{Rectangle, to_json};
use owo_colors::OwoColorize;

#[derive(Parser, Debug)]
#[command(name = "kata")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Simple selector
    kata selector element:a 'attr:href$=".png"' pseudo-class:focus

    # Combined selector (descendant combinator spelled out)
    kata selector element:div id:main + element:table descendant element:td

    # Zigzag matrix
    kata zigzag 4

    # Rectangle from JSON
    kata rect --from-json '{"width":10,"height":20}'
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a selector from `kind:value` parts and combinator symbols
    Selector {
        /// Parts such as `element:div`, `class:active`, `attr:href`, and
        /// combinators `>`, `+`, `~`, `descendant`
        #[arg(required = true, value_name = "TOKEN")]
        tokens: Vec<String>,

        /// Print the selector tree as JSON instead of CSS text
        #[arg(long)]
        json: bool,

        /// Also print the selector's specificity
        #[arg(short, long)]
        specificity: bool,
    },

    /// Print the N×N zigzag matrix
    Zigzag {
        /// Matrix dimension
        n: usize,
    },

    /// Print a rectangle's area, or its JSON form
    Rect {
        /// Rectangle width
        #[arg(required_unless_present = "from_json")]
        width: Option<f64>,

        /// Rectangle height
        #[arg(required_unless_present = "from_json")]
        height: Option<f64>,

        /// Read the rectangle from a JSON object instead
        #[arg(long, value_name = "JSON", conflicts_with_all = ["width", "height"])]
        from_json: Option<String>,

        /// Print the rectangle as JSON instead of its area
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Selector {
            tokens,
            json,
            specificity,
        } => {
            let selector = selector_args::build_selector(&tokens)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&selector)?);
            } else {
                println!("{selector}");
            }
            if specificity {
                println!("{} {}", "specificity".dimmed(), selector.specificity());
            }
        }
        Command::Zigzag { n } => {
            let matrix = kata_matrix::zigzag(n)?;
            println!("{}", kata_matrix::render(&matrix));
        }
        Command::Rect {
            width,
            height,
            from_json,
            json,
        } => {
            let rect = match (from_json, width, height) {
                (Some(text), _, _) => {
                    Rectangle::from_json(&text).context("failed to read rectangle JSON")?
                }
                (None, Some(width), Some(height)) => Rectangle::new(width, height),
                _ => anyhow::bail!("rect requires WIDTH and HEIGHT, or --from-json"),
            };
            if json {
                println!("{}", to_json(&rect)?);
            } else {
                println!("{} {}", "area".dimmed(), rect.area());
            }
        }
    }

    Ok(())
}
