use anyhow::{Context, Result};
use figblocks_config::Config;
use figblocks_engine::{io, parse};
use std::io::Read;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

fn usage(program: &str) {
    eprintln!("Usage: {program} [markdown-file|-] [-o output.json]");
    eprintln!("  markdown-file   Markdown document to export (- reads stdin)");
    eprintln!("  -o output.json  Write the block JSON to a file instead of stdout");
    eprintln!("With no arguments the document_path from the config file is used.");
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    // Parse arguments: one optional input, one optional -o target
    let mut input: Option<String> = None;
    let mut output: Option<PathBuf> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" => {
                i += 1;
                match args.get(i) {
                    Some(path) => output = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("Error: -o requires a file path");
                        usage(&args[0]);
                        process::exit(1);
                    }
                }
            }
            "-h" | "--help" => {
                usage(&args[0]);
                return Ok(());
            }
            arg if input.is_none() => input = Some(arg.to_string()),
            arg => {
                eprintln!("Error: unexpected argument '{arg}'");
                usage(&args[0]);
                process::exit(1);
            }
        }
        i += 1;
    }

    // The config supplies the fallback document and the JSON layout. A
    // broken config file must not block an export that names its input
    // explicitly, so it degrades to a warning here.
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring config file: {e}");
            None
        }
    };

    let markdown = match input.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read markdown from stdin")?;
            buf
        }
        Some(path) => io::read_document(Path::new(path))
            .with_context(|| format!("Failed to read '{path}'"))?,
        None => match &config {
            Some(config) => io::read_document(&config.document_path).with_context(|| {
                format!(
                    "Failed to read '{}' from config file '{}'",
                    config.document_path.display(),
                    config_path.display()
                )
            })?,
            None => {
                eprintln!("Error: No markdown document provided and no config file found");
                usage(&args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
        },
    };

    let blocks = parse(&markdown);

    let pretty = config.as_ref().map(Config::pretty_json).unwrap_or(true);
    let json = if pretty {
        serde_json::to_string_pretty(&blocks)?
    } else {
        serde_json::to_string(&blocks)?
    };

    match &output {
        Some(path) => fs::write(path, &json)
            .with_context(|| format!("Failed to write '{}'", path.display()))?,
        None => println!("{json}"),
    }

    eprintln!("{} blocks exported", blocks.len());
    Ok(())
}
