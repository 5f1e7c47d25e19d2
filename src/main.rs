//! Slide Merge entry point
//!
//! Plays in the terminal: one direction token per line (arrows by name, WASD
//! or hjkl), `q` to quit. An optional first argument names a settings file and
//! an optional second one picks a difficulty preset (`easy` or `hard`).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Slide Merge (native) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web front ends drive `platform::Session` directly
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use std::io::{self, BufRead};
    use std::path::Path;

    use slide_merge::platform::{InputOutcome, Session, TextRenderer};
    use slide_merge::{Difficulty, Engine, Settings};

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path))?,
        None => Settings::default(),
    };
    if let Some(name) = args.next() {
        match Difficulty::from_str(&name) {
            Some(difficulty) => settings.apply_preset(difficulty),
            None => log::warn!(
                "Unknown difficulty {name:?}, keeping {}",
                settings.difficulty.as_str()
            ),
        }
    }
    let engine = Engine::new(settings)?;
    log::info!(
        "Seed {}, difficulty {} (four chance {})",
        engine.seed(),
        engine.settings().difficulty.as_str(),
        engine.settings().four_probability()
    );

    let mut session = Session::new(engine, TextRenderer::new(io::stdout().lock()));
    session.start()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let token = line.trim();
        if token.eq_ignore_ascii_case("q") {
            break;
        }
        if session.on_input(token)? == InputOutcome::GameOver {
            break;
        }
    }
    Ok(())
}
