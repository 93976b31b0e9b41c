//! CLI command implementations
//!
//! Sequencing glue around the handler; all real behavior lives in
//! `handler`, `document`, and `audit`.

use std::fs;
use std::path::Path;

use crate::document::{serialize, Element};
use crate::handler::{DocumentHandler, DEFAULT_AUDIT_LOG};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to a command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch one parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Demo { path } => demo(&path),
        Command::Read { path } => read(&path),
        Command::Append { path, tag, text, attrs } => append(&path, tag, text, attrs),
    }
}

fn print_children(root: &Element) {
    println!("<{}> with {} child(ren):", root.tag, root.children.len());
    for child in &root.children {
        let attrs: Vec<String> = child
            .attributes()
            .iter()
            .map(|(k, v)| format!(" {k}='{v}'"))
            .collect();
        let text = child.text.as_deref().unwrap_or("");
        println!("  - <{}{}>{}</{}>", child.tag, attrs.concat(), text, child.tag);
    }
}

fn demo(path: &Path) -> CliResult<()> {
    println!("1. Opening '{}' before it exists:", path.display());
    if let Err(error) = DocumentHandler::open(path) {
        println!("   ! {error}");
    }

    println!("2. Creating '{}' and writing initial content:", path.display());
    let mut root = Element::new("data");
    root.children
        .push(Element::new("item").with_attribute("id", "1").with_text("first"));
    fs::write(path, serialize(&root)?)?;
    let handler = DocumentHandler::open(path)?;

    println!("3. Reading it back:");
    print_children(&handler.read()?);

    println!("4. Appending <item id='2'>:");
    handler.append(Element::new("item").with_attribute("id", "2").with_text("second"))?;
    print_children(&handler.read()?);

    println!("5. Overwriting with fresh content:");
    let mut fresh = Element::new("data");
    fresh
        .children
        .push(Element::new("item").with_attribute("id", "100").with_text("replacement"));
    handler.write(&fresh)?;
    print_children(&handler.read()?);

    println!("Audit trail for write/append appended to '{DEFAULT_AUDIT_LOG}'");
    Ok(())
}

fn read(path: &Path) -> CliResult<()> {
    let handler = DocumentHandler::open(path)?;
    print_children(&handler.read()?);
    Ok(())
}

fn append(
    path: &Path,
    tag: String,
    text: Option<String>,
    attrs: Vec<(String, String)>,
) -> CliResult<()> {
    let handler = DocumentHandler::open(path)?;
    let mut element = Element::new(tag);
    for (key, value) in attrs {
        element.set_attribute(key, value);
    }
    element.text = text;
    handler.append(element)?;
    Ok(())
}
