//! Shboot entry point
//!
//! Native builds have no window backend; they run a headless autopilot
//! session and log the HUD.
//!
//! Usage: `shboot [tuning.json]`
//! - `SHBOOT_SEED`: run seed (defaults to the current time)
//! - `SHBOOT_FRAMES`: frames to simulate (defaults to one minute)
//! - `RUST_LOG`: log filter (e.g. `info`, `shboot=debug`)

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use shboot::consts::{FPS, WINDOW_TITLE};
    use shboot::platform::HeadlessPlatform;
    use shboot::{Game, LogPresenter, Tuning, run};

    env_logger::init();
    log::info!("{} (native) starting...", WINDOW_TITLE);

    let tuning = match std::env::args().nth(1) {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{} - using default tuning", e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let seed = env_u64("SHBOOT_SEED").unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    let frame_limit = env_u64("SHBOOT_FRAMES").unwrap_or(u64::from(FPS) * 60);

    let mut game = Game::new(tuning, seed);
    let mut platform =
        HeadlessPlatform::new(1.0 / FPS as f32, frame_limit).with_idle_mode(true);
    let mut presenter = LogPresenter::new(u64::from(FPS) * 5);

    let frames = run(&mut game, &mut platform, &mut presenter);

    log::info!(
        "Session over after {} frames: score {}, high score {}, health {}",
        frames,
        game.state.score,
        game.state.high_score,
        game.state.player.health
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn env_u64(key: &str) -> Option<u64> {
    let value = std::env::var(key).ok()?;
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a number", key, value);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host yet; the library is driven by an embedding page
}
