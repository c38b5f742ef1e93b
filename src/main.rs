use sdguard::adapters::{LocalBackend, SystemClipboard};
use sdguard::app::{run_app, App};
use sdguard::config::{parse_args, AppConfig, Command, USAGE};
use sdguard::logging::init_logging;
use sdguard::storage::SecretStore;
use sdguard::terminal::{setup_panic_hook, TerminalManager};

use color_eyre::Result;
use crossterm::event::EventStream;
use std::sync::Arc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let config = match parse_args(AppConfig::from_env(), std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Version) => {
            println!("sdguard {}", VERSION);
            return Ok(());
        }
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    let store = SecretStore::new(&config.data_dir);
    tracing::info!("using secrets file {}", store.path().display());

    let backend = Arc::new(LocalBackend::open(store));
    let mut app = App::new(backend, Box::new(SystemClipboard::new()), config);
    app.initialize();

    let mut term_manager = TerminalManager::new()?;
    let size = term_manager.terminal().size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = run_app(term_manager.terminal(), &mut app, EventStream::new()).await;

    term_manager.restore();
    if let Err(e) = &result {
        tracing::error!("event loop exited with error: {}", e);
    }
    result
}
