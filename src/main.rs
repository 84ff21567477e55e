use clap::{error::ErrorKind, CommandFactory, Parser};
use clickshot::{
    app::{App, AppAction},
    config::{Config, ConfigStore, FileConfigStore},
    game::Game,
    logging,
    runtime::{CrosstermEventSource, FixedTicker, Runner},
    surface::PlaySurface,
    target::TargetGenerator,
    TICK_RATE_MS,
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::{Duration, Instant},
};

/// aim trainer: click the targets before the clock runs out
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Targets pop up at random spots on the play field. Click as many as you can before the session ends, then see your hit and click accuracy."
)]
pub struct Cli {
    /// session length in milliseconds
    #[clap(short = 'd', long = "duration")]
    duration_ms: Option<u64>,

    /// milliseconds between target spawns
    #[clap(long = "spawn-period")]
    spawn_period_ms: Option<u64>,

    /// cap on targets visible at once (unbounded when unset)
    #[clap(long)]
    max_targets: Option<usize>,

    /// drop any stored cap on visible targets
    #[clap(long, conflicts_with = "max_targets")]
    no_max_targets: bool,

    /// seed for target placement, for reproducible sessions
    #[clap(long)]
    seed: Option<u64>,

    /// write logs to this file (CLICKSHOT_LOG sets the filter)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// remember the given options as defaults for future runs
    #[clap(long)]
    save: bool,
}

impl Cli {
    /// Stored config with any command line overrides applied.
    /// Returns whether anything was overridden.
    fn apply_to(&self, mut cfg: Config) -> (Config, bool) {
        let mut changed = false;
        if let Some(d) = self.duration_ms {
            changed |= cfg.duration_ms != d;
            cfg.duration_ms = d;
        }
        if let Some(p) = self.spawn_period_ms {
            changed |= cfg.spawn_period_ms != p;
            cfg.spawn_period_ms = p;
        }
        if let Some(m) = self.max_targets {
            changed |= cfg.max_targets != Some(m);
            cfg.max_targets = Some(m);
        }
        if self.no_max_targets {
            changed |= cfg.max_targets.is_some();
            cfg.max_targets = None;
        }
        (cfg, changed)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(path) = logging::resolve_log_path(cli.log_file.as_deref()) {
        logging::init(&path)?;
    }

    let store = FileConfigStore::new();
    let (config, changed) = cli.apply_to(store.load());
    let settings = match config.session_config() {
        Ok(settings) => settings,
        Err(err) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::InvalidValue, err.to_string()).exit();
        }
    };
    if cli.save && changed {
        if let Err(err) = store.save(&config) {
            tracing::warn!(%err, path = %store.path().display(), "could not save config");
        }
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let generator = match cli.seed {
        Some(seed) => TargetGenerator::seeded(seed),
        None => TargetGenerator::from_entropy(),
    };
    let game = Game::with_generator(PlaySurface::new(), generator);
    let mut app = App::with_game(game, settings);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let epoch = Instant::now();

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        let event = runner.step();
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        match app.handle(event, epoch.elapsed(), area) {
            AppAction::Quit => break,
            AppAction::Redraw => {
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            AppAction::None => {}
        }
    }

    tracing::info!("exiting");
    Ok(())
}
