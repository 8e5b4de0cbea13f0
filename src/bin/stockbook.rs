//! Command-line front end for the catalog store.
//!
//! Each subcommand maps to one user action from the store contract: list the
//! catalog, show a selected product, add/remove/update records, and search by
//! substring. Outcomes are printed as one-line notifications; failures go to
//! stderr with a nonzero exit code.

use anyhow::{Context, Result, bail};
use std::collections::VecDeque;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use stockbook::{CatalogStore, DEFAULT_CATALOG_PATH};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    let mut store = match &cli.file {
        Some(path) => CatalogStore::open(path)
            .with_context(|| format!("opening catalog {}", path.display()))?,
        None => CatalogStore::open_default()
            .with_context(|| format!("opening catalog {DEFAULT_CATALOG_PATH}"))?,
    };

    match cli.command {
        Command::List => {
            for name in store.names() {
                println!("{name}");
            }
        }
        Command::Show { name } => match store.find(&name) {
            Some(product) => {
                println!("name: {}", product.name);
                println!("price: {}", product.price);
                println!("quantity: {}", product.quantity);
            }
            None => bail!("product not found: {name}"),
        },
        Command::Add {
            name,
            price,
            quantity,
        } => {
            store.add(&name, &price, &quantity)?;
            println!("Added '{name}'.");
        }
        Command::Remove { name } => {
            let removed = store.remove(&name)?;
            println!("Removed '{}'.", removed.name);
        }
        Command::Update {
            selected,
            name,
            price,
            quantity,
        } => {
            store.update(&selected, &name, &price, &quantity)?;
            println!("Updated '{selected}'.");
        }
        Command::Search { term } => {
            let matches = store.search(&term)?;
            if matches.is_empty() {
                println!("No products match '{term}'.");
            } else {
                for name in matches {
                    println!("{name}");
                }
            }
        }
        Command::Dump => {
            // NDJSON, one record per line, for machine consumers.
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for record in store.records() {
                serde_json::to_writer(&mut out, record)?;
                writeln!(out)?;
            }
        }
    }

    Ok(())
}

struct Cli {
    file: Option<PathBuf>,
    command: Command,
}

enum Command {
    List,
    Show {
        name: String,
    },
    Add {
        name: String,
        price: String,
        quantity: String,
    },
    Remove {
        name: String,
    },
    Update {
        selected: String,
        name: String,
        price: String,
        quantity: String,
    },
    Search {
        term: String,
    },
    Dump,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args: VecDeque<String> = env::args().skip(1).collect();
        let mut file = None;

        while let Some(front) = args.front() {
            match front.as_str() {
                "--file" | "-f" => {
                    args.pop_front();
                    let path = args.pop_front().context("--file requires a path")?;
                    file = Some(PathBuf::from(path));
                }
                "--help" | "-h" => usage(0),
                _ => break,
            }
        }

        let Some(verb) = args.pop_front() else {
            usage(1);
        };

        let command = match verb.as_str() {
            "list" => Command::List,
            "show" => Command::Show {
                name: take(&mut args, "show", "name")?,
            },
            "add" => Command::Add {
                name: take(&mut args, "add", "name")?,
                price: take(&mut args, "add", "price")?,
                quantity: take(&mut args, "add", "quantity")?,
            },
            "remove" => Command::Remove {
                name: take(&mut args, "remove", "name")?,
            },
            "update" => Command::Update {
                selected: take(&mut args, "update", "selected name")?,
                name: take(&mut args, "update", "name")?,
                price: take(&mut args, "update", "price")?,
                quantity: take(&mut args, "update", "quantity")?,
            },
            "search" => Command::Search {
                term: take(&mut args, "search", "term")?,
            },
            "dump" => Command::Dump,
            _ => usage(1),
        };

        if !args.is_empty() {
            let extra: Vec<String> = args.into_iter().collect();
            bail!("unexpected trailing arguments: {}", extra.join(" "));
        }

        Ok(Self { file, command })
    }
}

fn take(args: &mut VecDeque<String>, verb: &str, what: &str) -> Result<String> {
    args.pop_front()
        .with_context(|| format!("{verb} requires a {what} argument"))
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: stockbook [--file PATH] <command> [args]\n\nCommands:\n  list                                        Print every product name in catalog order.\n  show <name>                                 Print the fields of the first product with this exact name.\n  add <name> <price> <quantity>               Append a product and save the catalog.\n  remove <name>                               Delete the first product with this exact name and save.\n  update <selected> <name> <price> <quantity> Overwrite the first product named <selected> in place and save.\n  search <term>                               Print names containing <term>, ignoring case.\n  dump                                        Emit all records as NDJSON.\n\nThe catalog lives in ./products.csv unless --file picks another path."
    );
    std::process::exit(code);
}
