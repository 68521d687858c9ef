//! Number Pad - clickable numeric keypad for the terminal
//!
//! Interactive demo for the number pad widget: renders the pad, wires its
//! press/release observers to an input field, and runs until the cancel
//! key or q/Esc.

use anyhow::Result;
use clap::Parser;

use numpad_tui::config::{Config, ThemeMode};
use numpad_tui::constants::APP_BINARY_NAME;
use numpad_tui::tui;

/// Number Pad - clickable numeric keypad for the terminal
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Horizontal gap between keys in terminal cells
    #[arg(long, value_name = "CELLS")]
    hgap: Option<u16>,

    /// Vertical gap between keys in terminal lines
    #[arg(long, value_name = "LINES")]
    vgap: Option<u16>,

    /// Theme override: auto, dark, or light
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load or create default config, then apply CLI overrides
    let mut config = Config::load().unwrap_or_else(|_| Config::default());
    if let Some(hgap) = cli.hgap {
        config.pad.horizontal_gap = hgap;
    }
    if let Some(vgap) = cli.vgap {
        config.pad.vertical_gap = vgap;
    }
    if let Some(theme) = cli.theme.as_deref() {
        config.ui.theme_mode = match theme.to_lowercase().as_str() {
            "dark" => ThemeMode::Dark,
            "light" => ThemeMode::Light,
            "auto" => ThemeMode::Auto,
            other => {
                eprintln!("Unknown theme '{other}', expected auto, dark, or light");
                std::process::exit(1);
            }
        };
    }
    config.validate()?;

    let mut terminal = tui::setup_terminal()?;
    let mut app = tui::PadApp::new(&config);

    let result = tui::run_pad(&mut app, &mut terminal);

    tui::restore_terminal(terminal)?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_reports_binary_name() {
        assert_eq!(Cli::command().get_name(), APP_BINARY_NAME);
    }
}
