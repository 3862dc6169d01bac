use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "keymint")]
#[command(about = "Random UUID and hex key generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a UUID-v4-shaped identifier (the default)
    #[command(alias = "u")]
    Uuid {
        /// Also copy the result to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Generate a 64-character hex key
    #[command(alias = "h")]
    Hex {
        /// Also copy the result to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Show or change the light/dark theme
    #[command(alias = "t")]
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Flip between light and dark, persisting the choice
    Toggle,
}
