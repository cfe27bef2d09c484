//! Mailblocks CLI
//!
//! Usage:
//!   mailblocks [OPTIONS] <COMMAND>
//!
//! Options:
//!   -c, --catalog <FILE>  Component catalog (TOML format)
//!   -s, --store <DIR>     Directory holding saved templates
//!   -h, --help            Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailblocks::document::{new_instance_id, TemplateDocument};
use mailblocks::export::write_export;
use mailblocks::store::{DirectoryArea, TemplateStore};
use mailblocks::{render, render_with_config, Catalog, EditError, RenderConfig, StoreError};

#[derive(Parser)]
#[command(name = "mailblocks")]
#[command(about = "Assemble email templates from predefined blocks and render them to HTML")]
struct Cli {
    /// Component catalog file (TOML format); the built-in catalog is used if not provided
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory holding saved templates
    #[arg(short, long, global = true, default_value = ".mailblocks")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available components and their settings
    Components,

    /// Render a document file (reads from stdin if not provided)
    Render {
        input: Option<PathBuf>,

        /// Emit only the body fragment, without the html/body shell
        #[arg(long)]
        fragment: bool,
    },

    /// Create an empty template
    New { name: Option<String> },

    /// List saved templates, newest first
    List,

    /// Show the instances of a saved template
    Show { id: String },

    /// Rename a saved template
    Rename { id: String, name: String },

    /// Append a component instance to a saved template
    Add { id: String, component: String },

    /// Change one setting of an instance
    Set {
        id: String,
        instance: String,
        key: String,
        value: String,
    },

    /// Render a saved template to `<name>.html`
    Export {
        id: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Delete a saved template
    Remove { id: String },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Catalog(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("invalid document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("{context}: {source}")]
    Io {
        context: String,
        source: io::Error,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailblocks=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let catalog = load_catalog(cli.catalog.as_deref())?;
    let mut store = TemplateStore::new(DirectoryArea::new(&cli.store));

    match cli.command {
        Command::Components => {
            for def in catalog.list() {
                println!("{} - {}", def.id, def.description);
                for setting in &def.settings {
                    let default = def
                        .effective_default(&setting.key)
                        .map(|v| format!(" = {}", v))
                        .unwrap_or_default();
                    println!("    {} ({}){}", setting.key, setting.kind, default);
                }
            }
        }
        Command::Render { input, fragment } => {
            let source = read_input(input.as_deref())?;
            let doc = TemplateDocument::from_json(&source)?;
            let config = RenderConfig::new().with_standalone(!fragment);
            let output = render_with_config(&doc, &catalog, &config);
            for warning in &output.warnings {
                eprintln!("warning: {}", warning);
            }
            println!("{}", output.html);
        }
        Command::New { name } => {
            let doc = store.create(name.as_deref())?;
            println!("{}", doc.id);
        }
        Command::List => {
            for item in store.list()? {
                let saved = item.updated_at.with_timezone(&Local).format("%b %e, %Y %H:%M");
                println!("{}  {}  (saved {})", item.id, item.name, saved);
            }
        }
        Command::Show { id } => {
            let doc = store.require(&id)?;
            println!("{} ({})", doc.name, doc.id);
            for (index, instance) in doc.instances.iter().enumerate() {
                let stale = if catalog.contains(&instance.component_id) {
                    ""
                } else {
                    " [not in catalog]"
                };
                println!("  #{} {} {}{}", index, instance.id, instance.component_id, stale);
                for (key, value) in &instance.overrides {
                    println!("      {} = {}", key, value);
                }
            }
            for warning in render(&doc, &catalog).warnings {
                println!("  warning: {}", warning);
            }
        }
        Command::Rename { id, name } => {
            let doc = store.require(&id)?;
            store.save(&doc.with_name(name))?;
        }
        Command::Add { id, component } => {
            let doc = store.require(&id)?;
            let definition = catalog
                .get(&component)
                .ok_or(EditError::UnknownComponent { id: component.clone() })?;
            let instance_id = new_instance_id();
            store.save(&doc.with_instance(definition, instance_id.clone())?)?;
            println!("{}", instance_id);
        }
        Command::Set {
            id,
            instance,
            key,
            value,
        } => {
            let doc = store.require(&id)?;
            let component_id = doc
                .instance(&instance)
                .map(|i| i.component_id.clone())
                .ok_or_else(|| EditError::InstanceNotFound { id: instance.clone() })?;
            let setting = catalog
                .get(&component_id)
                .ok_or(EditError::UnknownComponent { id: component_id.clone() })?
                .setting(&key)
                .ok_or_else(|| EditError::UnknownSetting {
                    component: component_id.clone(),
                    key: key.clone(),
                })?;
            let value = setting.parse_value(&value)?;
            store.save(&doc.with_setting(&catalog, &instance, &key, value)?)?;
        }
        Command::Export { id, out_dir } => {
            let doc = store.require(&id)?;
            let output = render(&doc, &catalog);
            for warning in &output.warnings {
                eprintln!("warning: {}", warning);
            }
            let path = write_export(&out_dir, &doc.name, &output.html).map_err(|source| {
                CliError::Io {
                    context: format!("writing export to '{}'", out_dir.display()),
                    source,
                }
            })?;
            println!("{}", path.display());
        }
        Command::Remove { id } => {
            store.require(&id)?;
            store.remove(&id)?;
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };

    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        context: format!("reading catalog '{}'", path.display()),
        source,
    })?;
    content
        .parse::<Catalog>()
        .map_err(|e| CliError::Catalog(e.format(&content, &path.display().to_string())))
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Io {
            context: format!("reading file '{}'", path.display()),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| CliError::Io {
                    context: "reading from stdin".to_string(),
                    source,
                })?;
            Ok(buffer)
        }
    }
}
