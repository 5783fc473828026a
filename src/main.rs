use std::path::Path;

use clap::Parser;
use lyst::cli::commands::{Cli, Commands};
use lyst::cli::handlers;
use lyst::io::config_io::load_config;
use lyst::tui::{self, Widget};
use lyst::view::page::Page;
use lyst::view::quick::QuickPage;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        // No subcommand → launch the TUI on an empty list
        None => run_tui(cli, None),
        Some(Commands::Open(ref args)) => {
            let link = args.link.clone();
            run_tui(cli, Some(link));
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_tui(cli: Cli, link: Option<String>) {
    let config = match load_config(cli.config.as_deref().map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let widget = if cli.plain {
        // The plain list has no persistence; a link makes no sense here
        if link.is_some() {
            eprintln!("error: --plain lists have no share links to open");
            std::process::exit(1);
        }
        Widget::Plain(QuickPage::new())
    } else {
        let page = match link {
            None => Page::new(config.share.clone()),
            Some(link) => {
                let location = match handlers::resolve_link(&link, &config) {
                    Ok((location, _)) => location,
                    Err(e) => {
                        eprintln!("error: {}", e);
                        std::process::exit(1);
                    }
                };
                match Page::open(&location.href(), config.share.clone()) {
                    Ok(page) => page,
                    Err(e) => {
                        eprintln!("error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
        };
        Widget::Rich(page)
    };

    if let Err(e) = tui::run(widget, &config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
