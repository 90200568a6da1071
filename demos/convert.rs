//! Example demonstrating Markdown to DOCX conversion.
//!
//! Reads a Markdown file and writes the converted Word document next to it.
//!
//! Run with:
//! ```sh
//! cargo run --example convert -- input.md output.docx
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Convert a Markdown file with embedded LaTeX math into a Word document.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input Markdown file
    input: PathBuf,

    /// Output .docx file
    output: PathBuf,

    /// Print the generated document part instead of only writing the file
    #[arg(long)]
    show_xml: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let markdown = std::fs::read_to_string(&args.input)?;
    let pkg = quince::DocxPackage::from_markdown(&markdown);

    if args.show_xml {
        println!("{}", pkg.document_xml());
    }

    pkg.write(&args.output)?;
    println!(
        "Converted {} -> {}",
        args.input.display(),
        args.output.display()
    );

    Ok(())
}
