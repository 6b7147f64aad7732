//! Frame loop
//!
//! Each frame: sample input from the platform, advance the simulation by the
//! frame's `dt`, then hand a fresh draw list to the presenter.

use crate::platform::{Platform, sample_input};
use crate::renderer::{DrawList, VertexUpload, build_draw_list};
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::Tuning;

/// Frames averaged for the FPS counter
const FPS_WINDOW: usize = 60;

/// Consumer of finished frames
pub trait Presenter {
    fn present(&mut self, frame: &DrawList);
}

/// Game instance: simulation plus frame-rate tracking
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    /// Simulated seconds since start
    clock: f64,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Game {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(tuning, seed),
            clock: 0.0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Frames per second over the last `FPS_WINDOW` frames
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Run one frame and return what to draw
    pub fn frame<P: Platform + ?Sized>(&mut self, platform: &mut P) -> DrawList {
        let (dt, input) = sample_input(platform);
        tick(&mut self.state, &input, dt);

        self.track_fps(dt);
        self.log_events();

        build_draw_list(&self.state, self.fps)
    }

    fn track_fps(&mut self, dt: f32) {
        self.clock += f64::from(dt);
        let time = self.clock;

        // Read before overwriting: this slot holds the time FPS_WINDOW frames ago
        let oldest_time = self.frame_times[self.frame_index];
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = (FPS_WINDOW as f64 / elapsed).round() as u32;
            }
        }
    }

    fn log_events(&mut self) {
        for event in self.state.drain_events() {
            let Some(level) = event_level(&event) else {
                continue;
            };
            match event {
                GameEvent::Reset => log::log!(level, "Run reset"),
                GameEvent::HealthAwarded { health } => {
                    log::log!(level, "Bonus life! Health now {}", health)
                }
                GameEvent::NewHighScore { score } => log::log!(level, "New high score: {}", score),
                GameEvent::PlayerHit { health } => log::log!(level, "Health left: {}", health),
                GameEvent::EnemySpawned { .. }
                | GameEvent::BulletFired { .. }
                | GameEvent::EnemyDestroyed { .. } => {}
            }
        }
    }
}

/// Level an event is logged at. Per-entity events are too frequent to log.
fn event_level(event: &GameEvent) -> Option<log::Level> {
    match event {
        GameEvent::Reset | GameEvent::HealthAwarded { .. } | GameEvent::NewHighScore { .. } => {
            Some(log::Level::Info)
        }
        GameEvent::PlayerHit { .. } => Some(log::Level::Debug),
        GameEvent::EnemySpawned { .. }
        | GameEvent::BulletFired { .. }
        | GameEvent::EnemyDestroyed { .. } => None,
    }
}

/// Drive `game` until the platform asks to close. Returns frames run.
pub fn run<P, R>(game: &mut Game, platform: &mut P, presenter: &mut R) -> u64
where
    P: Platform + ?Sized,
    R: Presenter + ?Sized,
{
    let mut frames = 0;
    while !platform.should_close() {
        let list = game.frame(platform);
        presenter.present(&list);
        frames += 1;
    }
    frames
}

/// Headless presenter: prepares every frame's vertex upload as a GPU
/// backend would and logs the HUD now and then
#[derive(Debug, Clone)]
pub struct LogPresenter {
    every: u64,
    frames: u64,
    /// Upload built from the most recent frame
    pub last_upload: Option<VertexUpload>,
}

impl LogPresenter {
    /// Log once every `every` frames
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
            last_upload: None,
        }
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &DrawList) {
        let upload = VertexUpload::from_draw_list(frame);
        self.frames += 1;

        if self.frames % self.every == 0 {
            let hud: Vec<&str> = frame.texts().collect();
            log::info!(
                "frame {}: {} ({} vertices, {} bytes)",
                self.frames,
                hud.join(" | "),
                upload.vertex_count,
                upload.bytes.len()
            );
        }
        self.last_upload = Some(upload);
    }
}
