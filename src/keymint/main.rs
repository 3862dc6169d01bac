use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use keymint::ambient::SystemScheme;
use keymint::api::KeymintApi;
use keymint::clipboard::SystemClipboard;
use keymint::error::Result;
use keymint::model::{Notification, NotificationKind, Theme};
use keymint::store::fs::FilePrefs;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands, ThemeAction};

type App = KeymintApi<FilePrefs, SystemClipboard>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut app = init_app();

    match cli.command {
        Some(Commands::Uuid { copy }) => handle_uuid(&mut app, copy),
        Some(Commands::Hex { copy }) => handle_hex(&mut app, copy),
        Some(Commands::Theme { action }) => handle_theme(&mut app, action),
        None => handle_uuid(&mut app, false),
    }
}

fn init_app() -> App {
    // KEYMINT_DATA_DIR is an escape hatch for tests and sandboxed installs.
    let data_dir = match std::env::var_os("KEYMINT_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "keymint", "keymint")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let prefs = FilePrefs::new(data_dir);
    KeymintApi::new(prefs, SystemClipboard, &SystemScheme)
}

fn handle_uuid(app: &mut App, copy: bool) -> Result<()> {
    let result = app.generate_identifier();
    if let Some(id) = &result.identifier {
        println!("{}", id);
    }
    print_notification(app.theme(), result.notification.as_ref());

    if copy {
        let result = app.copy_identifier()?;
        print_notification(app.theme(), result.notification.as_ref());
    }
    Ok(())
}

fn handle_hex(app: &mut App, copy: bool) -> Result<()> {
    let result = app.generate_hex_key();
    if let Some(key) = &result.hex_key {
        println!("{}", key);
    }
    print_notification(app.theme(), result.notification.as_ref());

    if copy {
        let result = app.copy_hex_key()?;
        print_notification(app.theme(), result.notification.as_ref());
    }
    Ok(())
}

fn handle_theme(app: &mut App, action: Option<ThemeAction>) -> Result<()> {
    match action {
        None => println!("{}", app.theme()),
        Some(ThemeAction::Toggle) => {
            let result = app.toggle_theme();
            if let Some(theme) = result.theme {
                println!("{}", theme);
            }
        }
    }
    Ok(())
}

/// Notifications go to stderr so stdout stays clean for piping the value.
/// The palette is fixed per theme, chosen at raise-time.
fn print_notification(theme: Theme, notification: Option<&Notification>) {
    let Some(n) = notification else {
        return;
    };
    let styled = match (n.kind, theme) {
        (NotificationKind::Success, Theme::Dark) => n.text.bright_blue(),
        (NotificationKind::Success, Theme::Light) => n.text.blue(),
        (NotificationKind::Error, Theme::Dark) => n.text.bright_red(),
        (NotificationKind::Error, Theme::Light) => n.text.red(),
    };
    eprintln!("{}", styled);
}
