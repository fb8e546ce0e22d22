use arkiv::browser::Browser;
use arkiv::catalog::Catalog;
use arkiv::config::BrowseConfig;
use arkiv::error::{ArkivError, Result};
use arkiv::location::{Location, MemoryLocation};
use arkiv::query::{DateFilter, Filters, MediaFilter, SortKey};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

mod args;
mod print;
mod sample;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = load_catalog(&cli)?;

    match cli.command {
        Some(Commands::Browse {
            search,
            year,
            media,
            sort,
            page,
            query,
            reveal,
            no_delay,
        }) => handle_browse(
            catalog,
            BrowseOpts {
                search,
                year,
                media,
                sort,
                page,
                query,
                reveal,
                no_delay,
            },
        ),
        Some(Commands::Facets) => {
            print::print_facets(&catalog);
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(key, value),
        None => handle_browse(catalog, BrowseOpts::default()),
    }
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    match &cli.catalog {
        Some(path) => Catalog::load(path),
        None => Ok(sample::catalog()),
    }
}

fn config_dir() -> Result<PathBuf> {
    // Test runs point this at a temp dir.
    if let Ok(dir) = std::env::var("ARKIV_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "arkiv", "arkiv")
        .ok_or_else(|| ArkivError::Config("Could not determine config dir".into()))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

#[derive(Debug, Default)]
struct BrowseOpts {
    search: Option<String>,
    year: Option<String>,
    media: Option<String>,
    sort: Option<String>,
    page: Option<usize>,
    query: String,
    reveal: bool,
    no_delay: bool,
}

fn handle_browse(catalog: Catalog, opts: BrowseOpts) -> Result<()> {
    let config = BrowseConfig::load(config_dir()?)?;
    let location = MemoryLocation::new(opts.query);
    let mut browser = Browser::mount(catalog, config.clone(), location);
    let mut ticket = browser.refresh();

    if opts.year.is_some() || opts.media.is_some() {
        let filters = Filters {
            date: opts
                .year
                .as_deref()
                .map(DateFilter::parse)
                .unwrap_or_default(),
            media: opts
                .media
                .as_deref()
                .map(MediaFilter::parse)
                .unwrap_or_default(),
        };
        ticket = browser.set_filters(filters);
    }
    if let Some(term) = opts.search {
        ticket = browser.set_search_term(term);
    }
    if let Some(sort) = opts.sort {
        ticket = browser.set_sort_key(SortKey::parse(&sort));
    }
    if opts.reveal {
        ticket = browser.toggle_content_visibility();
    }
    if let Some(page) = opts.page {
        ticket = browser.go_to_page(page);
    }

    if !opts.no_delay {
        std::thread::sleep(Duration::from_millis(config.reveal_delay_ms));
    }
    browser.finish_loading(ticket);

    print::print_view(&browser.view());
    print::print_location(browser.location().query());
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = config_dir()?;
    let mut config = BrowseConfig::load(&dir)?;

    let Some(key) = key else {
        println!("page-size = {}", config.page_size);
        println!("max-buttons = {}", config.max_buttons);
        println!("reveal-delay-ms = {}", config.reveal_delay_ms);
        return Ok(());
    };

    let Some(value) = value else {
        match key.as_str() {
            "page-size" => println!("{}", config.page_size),
            "max-buttons" => println!("{}", config.max_buttons),
            "reveal-delay-ms" => println!("{}", config.reveal_delay_ms),
            _ => return Err(ArkivError::Config(format!("Unknown config key: {}", key))),
        }
        return Ok(());
    };

    match key.as_str() {
        "page-size" => {
            config.page_size = parse_config_value(&key, &value)?;
        }
        "max-buttons" => {
            config.max_buttons = parse_config_value(&key, &value)?;
        }
        "reveal-delay-ms" => {
            config.reveal_delay_ms = parse_config_value(&key, &value)?;
        }
        _ => return Err(ArkivError::Config(format!("Unknown config key: {}", key))),
    }
    config.validate()?;
    config.save(&dir)?;
    println!("{} set to {}", key, value);
    Ok(())
}

fn parse_config_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| ArkivError::Config(format!("Invalid value for {}: {}", key, value)))
}
