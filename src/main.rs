use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::DefaultTerminal;

use suggestfield::app::App;
use suggestfield::config::{self, Config};
use suggestfield::{SuggestionField, SuggestionState};

/// Text field with autocomplete suggestions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Config file (defaults to ~/.config/suggestfield/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Shift the suggestion panel down (negative moves it up)
    #[arg(long, value_name = "CELLS", allow_hyphen_values = true)]
    vertical_offset: Option<i16>,

    /// Shift the suggestion panel right (negative moves it left)
    #[arg(long, value_name = "CELLS", allow_hyphen_values = true)]
    horizontal_offset: Option<i16>,

    /// Print the suggestions for TEXT and exit without starting the UI
    #[arg(short, long, value_name = "TEXT")]
    matches: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let field = SuggestionField::from_config(&config)
        .on_select(|value| log::info!("Suggestion selected: {}", value));

    if let Some(text) = cli.matches.as_deref() {
        return print_matches(&field, text);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    io::stdout().execute(EnableMouseCapture)?;

    let result = run(&mut terminal, App::new(field));

    // Restore terminal (automatic cleanup)
    let _ = io::stdout().execute(DisableMouseCapture);
    ratatui::restore();

    if let Some(output) = result? {
        println!("{}", output);
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };

    if let Some(vertical) = cli.vertical_offset {
        config.panel.vertical_offset = vertical;
    }
    if let Some(horizontal) = cli.horizontal_offset {
        config.panel.horizontal_offset = horizontal;
    }

    Ok(config)
}

fn print_matches(field: &SuggestionField, text: &str) -> Result<()> {
    let state = SuggestionState::with_text(text);
    let mut stdout = io::stdout().lock();
    for candidate in field.filtered(&state) {
        writeln!(stdout, "{}", candidate)?;
    }
    Ok(())
}

fn run(terminal: &mut DefaultTerminal, mut app: App) -> Result<Option<String>> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app.output().map(str::to_string))
}

/// Log to a file in the temp directory; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::temp_dir().join("suggestfield.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
