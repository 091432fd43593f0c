use readalong::app::App;
use readalong::cli::{parse_args, CliCommand, USAGE};
use readalong::config::Config;
use readalong::logging::init_logger;
use readalong::playback::PlaybackController;
use readalong::reading::tokenize;
use readalong::speech::SimulatedEngine;
use readalong::ui::{PassageRenderer, Theme, TuiManager};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (source, overrides) = match parse_args(&args) {
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Run { source, overrides }) => (source, overrides),
        Err(err) => {
            eprintln!("{}\n\n{}", err, USAGE);
            std::process::exit(2);
        }
    };
    let config = overrides.apply(Config::default());

    let source = source.open();
    let fragments = source.fragments()?;
    let sequence = tokenize(&fragments);
    log::info!(
        "loaded {} fragments ({} words) from {}",
        fragments.len(),
        sequence.word_count(),
        source.describe()
    );

    let renderer = PassageRenderer::new(&sequence);
    let engine = SimulatedEngine::new(config.engine.clone());
    let controller = PlaybackController::with_sequence(
        engine,
        renderer,
        sequence,
        &config.playback,
        config.sync,
    );

    let mut app = App::new(controller, source.describe());
    app.start();

    // Run the main TUI event loop until the user quits
    let mut tui = TuiManager::new(Theme::from(config.theme))?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
