// SPDX-License-Identifier: PMPL-1.0-or-later

//! item-names: localized item-name resolution from the command line
//!
//! Loads the default and override translation tables plus an optional
//! protocol dictionary, runs one command against the resolution service, and
//! writes the override table back if the command changed it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use item_names::config::ItemNameConfig;
use item_names::i18n::{format_message, t, Lang};
use item_names::registrar::{Prompt, RegistrarInput, RegistrarSession};
use item_names::{ItemDescriptor, ItemNameService};
use serde::Deserialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "item-names")]
#[command(version)]
#[command(about = "Localized item-name resolution with layered fallback lookup")]
#[command(long_about = None)]
struct Cli {
    /// Config file (yaml/yml/json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Default translation table (bundled table when unset)
    #[arg(long, global = true)]
    defaults: Option<PathBuf>,

    /// Writable override table
    #[arg(long, global = true)]
    overrides: Option<PathBuf>,

    /// Protocol item dictionary (yaml/yml/json)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Language of operator messages
    #[arg(long, global = true, value_enum)]
    lang: Option<LangArg>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate item descriptors
    Translate {
        /// File holding one item descriptor or a list of them
        #[arg(value_name = "ITEMS")]
        items: PathBuf,

        /// Translate even items that carry a custom name
        #[arg(short, long)]
        must: bool,
    },

    /// Print the derived lookup key of each item
    DeriveKey {
        #[arg(value_name = "ITEMS")]
        items: PathBuf,
    },

    /// Register a translation
    Register {
        #[arg(value_name = "KEY")]
        key: String,

        #[arg(value_name = "LABEL")]
        label: String,
    },

    /// Discard overrides and restore the default translations
    RestoreDefaults,

    /// Print the network id index
    Index,

    /// Interactive registration console on stdin
    Admin,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    Ko,
    En,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Ko => Lang::Ko,
            LangArg::En => Lang::En,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemsFile {
    Many(Vec<ItemDescriptor>),
    One(Box<ItemDescriptor>),
}

fn load_items(path: &Path) -> Result<Vec<ItemDescriptor>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading items {}", path.display()))?;
    let file: ItemsFile = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("parsing json items {}", path.display()))?,
        _ => serde_yaml::from_str(&content)
            .with_context(|| format!("parsing yaml items {}", path.display()))?,
    };
    Ok(match file {
        ItemsFile::Many(items) => items,
        ItemsFile::One(item) => vec![*item],
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ItemNameConfig::from_file(path)?,
        None => ItemNameConfig::default(),
    };
    if let Some(defaults) = cli.defaults {
        config.defaults = Some(defaults);
    }
    if let Some(overrides) = cli.overrides {
        config.overrides = overrides;
    }
    if let Some(dictionary) = cli.dictionary {
        config.dictionary = Some(dictionary);
    }
    if let Some(lang) = cli.lang {
        config.lang = lang.into();
    }

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        config.tracing_level()?
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let service = config.build_service()?;
    let lang = config.lang;

    match cli.command {
        Commands::Translate { items, must } => {
            for item in load_items(&items)? {
                let label = service.translate(&item, must);
                println!("{:>8}  {}", item.state_id, label);
            }
            print_failures(&service, lang);
        }

        Commands::DeriveKey { items } => {
            for item in load_items(&items)? {
                println!("{:>8}  {}", item.state_id, service.derive_key(&item));
            }
        }

        Commands::Register { key, label } => {
            let key = service.register(&key, &label);
            println!(
                "{}",
                format_message(
                    t(lang, "notice.registered"),
                    &[("key", key.as_str()), ("label", label.as_str())],
                )
            );
        }

        Commands::RestoreDefaults => {
            service.restore_defaults();
            println!("{}", t(lang, "notice.restored"));
        }

        Commands::Index => {
            let index = service.index_snapshot();
            for (net_id, key) in index.iter() {
                println!("{:>8}  {}", net_id, key);
            }
            let count = index.len().to_string();
            println!(
                "\n{}",
                format_message(t(lang, "cli.index"), &[("count", count.as_str())]).bold()
            );
        }

        Commands::Admin => run_console(&service, lang)?,
    }

    if let Some(count) = config.persist_on_shutdown(service)? {
        let count = count.to_string();
        let path = config.overrides.display().to_string();
        println!(
            "{}",
            format_message(
                t(lang, "cli.saved"),
                &[("count", count.as_str()), ("path", path.as_str())],
            )
        );
    }

    Ok(())
}

fn print_failures(service: &ItemNameService, lang: Lang) {
    let failures = service.list_failures();
    if failures.is_empty() {
        return;
    }
    println!("\n{}", t(lang, "cli.failures").red().bold());
    for (net_id, info) in failures {
        println!("  {:>8}  {}", net_id, info);
    }
}

// Drive a registrar session from stdin. EOF, or an empty line at a menu,
// dismisses the current prompt.
fn run_console(service: &ItemNameService, lang: Lang) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = RegistrarSession::new(service, lang);
    let mut prompt = session.prompt();

    loop {
        let input = match &prompt {
            Prompt::Notice(notice) => {
                println!("{}", notice.green());
                break;
            }
            Prompt::Menu {
                title,
                content,
                buttons,
            } => {
                println!("\n{}", title.bold());
                if !content.is_empty() {
                    println!("{}", content);
                }
                for (idx, button) in buttons.iter().enumerate() {
                    println!("  {}) {}", idx + 1, button);
                }
                match read_line(&mut lines, "> ")? {
                    Some(line) => match line.parse::<usize>() {
                        Ok(choice) if choice > 0 => RegistrarInput::Choose(choice - 1),
                        _ => RegistrarInput::Dismiss,
                    },
                    None => RegistrarInput::Dismiss,
                }
            }
            Prompt::Form { title, fields } => {
                println!("\n{}", title.bold());
                let mut values = Vec::with_capacity(fields.len());
                for field in fields {
                    let hint = if field.default.is_empty() {
                        &field.placeholder
                    } else {
                        &field.default
                    };
                    let label = format!("{} [{}]: ", field.label, hint);
                    match read_line(&mut lines, &label)? {
                        Some(value) if value.is_empty() && !field.default.is_empty() => {
                            values.push(field.default.clone())
                        }
                        Some(value) => values.push(value),
                        None => break,
                    }
                }
                match (values.first(), values.get(1)) {
                    (Some(key), Some(label)) => RegistrarInput::Submit {
                        key: key.clone(),
                        label: label.clone(),
                    },
                    _ => RegistrarInput::Dismiss,
                }
            }
        };
        prompt = session.handle(input);
    }

    Ok(())
}

fn read_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
