//! Plate Catch entry point
//!
//! On the web this attaches the game to the page. Natively it runs a headless
//! demo: the autopilot plays one session at 60 fps of simulated time and the
//! final state is printed as JSON.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    plate_catch::platform::web::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use plate_catch::notify::LogNotifier;
    use plate_catch::{GameConfig, GameLoop};

    // Simulated display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    // Give up after ten simulated minutes
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Plate Catch (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    let mut args = std::env::args().skip(1);
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("Invalid seed ({e}), using 42");
            42
        }
        None => 42,
    };
    let config_json = args.next().and_then(|path| match std::fs::read_to_string(&path) {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("Could not read config {path}: {e}");
            None
        }
    });
    let config = GameConfig::load_or_default(config_json.as_deref());

    let mut game = GameLoop::new(config, seed, LogNotifier);
    game.set_autopilot(true);
    game.start(0.0);

    let mut frames = 0;
    while game.is_running() && frames < MAX_FRAMES {
        frames += 1;
        game.frame(frames as f64 * FRAME_MS);
    }

    let session = game.session();
    log::info!(
        "Demo finished after {} frames ({:.1}s): score {}, phase {:?}",
        frames,
        frames as f64 * FRAME_MS / 1000.0,
        session.score,
        session.phase
    );

    match serde_json::to_string_pretty(session) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize session: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
