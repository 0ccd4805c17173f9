//! Rosling - a terminal-based interactive dashboard viewer.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rosling::app::App;
use rosling::dashboards::DashboardKind;
use rosling::session::Session;
use rosling::ui;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "rosling")]
#[command(about = "A terminal-based interactive dashboard viewer", long_about = None)]
struct Args {
    /// Dashboard to serve: linked-selects, literacy, or gapminder
    dashboard: String,

    /// Directory holding the dashboard CSV files
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Rosling");
    }

    // Compose the session before touching the terminal so load errors print
    // to a normal screen.
    let session = match Session::build(&args.dashboard, &args.data_dir) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, rosling::RoslingError::UnknownDashboard { .. }) {
                let names: Vec<&str> = DashboardKind::ALL.iter().map(|k| k.name()).collect();
                eprintln!("Available dashboards: {}", names.join(", "));
            }
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(session);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Rosling exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Popup mode - handle separately
                if app.popup.is_some() {
                    match (key.modifiers, key.code) {
                        (KeyModifiers::NONE, KeyCode::Esc)
                        | (KeyModifiers::NONE, KeyCode::Char('q')) => {
                            app.popup_cancel();
                        }
                        (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            app.popup_move(-1);
                        }
                        (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                            app.popup_move(1);
                        }
                        (KeyModifiers::NONE, KeyCode::Enter)
                        | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                            app.popup_commit();
                        }
                        _ => {}
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Focus
                    (KeyModifiers::NONE, KeyCode::Tab) => app.focus_next(),
                    (_, KeyCode::BackTab) => app.focus_prev(),

                    // Open the focused dropdown
                    (KeyModifiers::NONE, KeyCode::Enter)
                    | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                        app.open_popup();
                    }

                    // Slider
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.slider_step(-1);
                    }
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                        app.slider_step(1);
                    }

                    // Views
                    (KeyModifiers::NONE, KeyCode::Char('v')) => app.toggle_view(),
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

                    // Point inspection
                    (KeyModifiers::NONE, KeyCode::Char('n')) => app.inspect_step(1),
                    (KeyModifiers::SHIFT, KeyCode::Char('N')) => app.inspect_step(-1),
                    (KeyModifiers::NONE, KeyCode::Esc) => app.inspect_clear(),

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_bundle(),

                    // Table scrolling
                    (KeyModifiers::NONE, KeyCode::Char('j')) => app.scroll_table_down(1),
                    (KeyModifiers::NONE, KeyCode::Char('k')) => app.scroll_table_up(1),
                    (KeyModifiers::CONTROL, KeyCode::Char('d')) => app.scroll_table_down(10),
                    (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.scroll_table_up(10),

                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status = "Help: q=quit, Tab=focus, Enter=open, ←→=slider, n=inspect, v=view, y=copy, T=theme".to_string();
                    }

                    _ => {}
                }
            }
        }
    }
}
