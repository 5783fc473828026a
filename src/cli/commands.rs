use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lyst", about = concat!("[*] lyst v", env!("CARGO_PKG_VERSION"), " - the list lives in the link"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Run the plain list (no flags, no sorting, no share link)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Read settings from this file instead of ./lyst.toml
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a shared link in the TUI
    Open(OpenArgs),
    /// Print the items a shared link contains
    Show(ShowArgs),
    /// Read items from stdin (one per line) and print a share link
    Encode(EncodeArgs),
    /// Print the QR image URL for a shared link
    Qr(QrArgs),
}

#[derive(Args)]
pub struct OpenArgs {
    /// A link produced by lyst (or just its fragment part)
    pub link: String,
}

#[derive(Args)]
pub struct ShowArgs {
    /// A link produced by lyst (or just its fragment part)
    pub link: String,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct EncodeArgs {
    /// Mark every read item as already completed
    #[arg(long)]
    pub done: bool,
}

#[derive(Args)]
pub struct QrArgs {
    /// A link produced by lyst
    pub link: String,
}
