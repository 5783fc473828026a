use std::io::Read;
use std::path::Path;

use crate::cli::commands::{Cli, Commands, EncodeArgs, QrArgs, ShowArgs};
use crate::codec::fragment::{CodecError, decode_fragment, encode_fragment};
use crate::codec::share::{Location, qr_image_url};
use crate::io::config_io::load_config;
use crate::model::config::Config;
use crate::model::item::Item;
use crate::model::list::TodoList;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref().map(Path::new))?;

    match cli.command {
        // Open is handled in main.rs (it launches the TUI)
        None | Some(Commands::Open(_)) => Ok(()),
        Some(Commands::Show(args)) => cmd_show(args, &config),
        Some(Commands::Encode(args)) => cmd_encode(args, &config),
        Some(Commands::Qr(args)) => cmd_qr(args, &config),
    }
}

/// Resolve a link argument into a location plus its decoded list. The
/// argument may be a full link or just the fragment part; a bare fragment
/// is resolved against the configured base address.
pub fn resolve_link(link: &str, config: &Config) -> Result<(Location, TodoList), CodecError> {
    let location = if link.contains('#') || link.contains("://") {
        Location::parse(link)
    } else {
        Location {
            base: config.share.base_url.clone(),
            fragment: link.to_string(),
        }
    };
    let list = decode_fragment(&location.fragment)?;
    Ok((location, list))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_show(args: ShowArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (_, list) = resolve_link(&args.link, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&list.items)?);
        return Ok(());
    }

    for item in &list.items {
        let mark = if item.done { 'x' } else { ' ' };
        println!("[{}] {}", mark, item.text);
    }
    Ok(())
}

fn cmd_encode(args: EncodeArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let list: TodoList = input
        .lines()
        .map(|line| {
            let mut item = Item::new(line);
            item.done = args.done;
            item
        })
        .collect();

    let location = Location {
        base: config.share.base_url.clone(),
        fragment: encode_fragment(&list),
    };
    println!("{}", location.href());
    Ok(())
}

fn cmd_qr(args: QrArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (location, _) = resolve_link(&args.link, config)?;
    println!("{}", qr_image_url(&config.share, &location.href()));
    Ok(())
}
