use std::path::PathBuf;

use anyhow::Result;

use sable_engine::coords::Vec2;
use sable_engine::core::{App, FrameCtx, LoopControl};
use sable_engine::error::SketchError;
use sable_engine::logging::{init_logging, LoggingConfig};
use sable_engine::paint::Color;
use sable_engine::runtime::{Presenter, Runtime, RuntimeConfig};
use sable_engine::surface::{Canvas, Surface};
use sable_engine::time::FrameTime;

// ── Bounce ────────────────────────────────────────────────────────────────

/// The classic wrap-around sketch: a disc slides right across a centered
/// surface and re-enters from the left edge once it has fully left the
/// right one. The surface is not cleared between frames, so the disc
/// smears a trail — part of the look.
struct Bounce {
    radius: f32,
    step: f32,
    loc: Vec2,
}

impl Bounce {
    fn new(radius: f32) -> Self {
        Self {
            radius,
            step: 5.0,
            loc: Vec2::zero(),
        }
    }
}

impl App for Bounce {
    fn setup(&mut self, canvas: &mut Canvas) -> Result<(), SketchError> {
        canvas.background(600, 400, Color::from_hex("#000000")?)?;
        canvas.center(true)?;
        self.loc = Vec2::new(self.radius, canvas.height()? / 2.0);
        Ok(())
    }

    fn frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<LoopControl, SketchError> {
        let canvas = &mut *ctx.canvas;
        canvas.circle(self.loc, self.radius, Color::from_hex("#ffffff")?, true)?;

        self.loc.translate(Vec2::new(self.step, 0.0));
        if self.loc.x - self.radius >= canvas.width()? {
            self.loc.x = -self.radius;
            log::info!("wrapped at frame {}", ctx.time.frame_index);
        }
        Ok(LoopControl::Continue)
    }
}

// ── PngPresenter ──────────────────────────────────────────────────────────

/// Writes every `every`-th frame as a PNG under `dir`.
struct PngPresenter {
    dir: PathBuf,
    every: u64,
}

impl Presenter for PngPresenter {
    fn present(&mut self, surface: &Surface, time: FrameTime) -> LoopControl {
        if time.frame_index % self.every != 0 {
            return LoopControl::Continue;
        }

        let path = self.dir.join(format!("frame_{:04}.png", time.frame_index));
        let (w, h) = (surface.pixel_width(), surface.pixel_height());
        let Some(img) = image::RgbaImage::from_raw(w, h, surface.data().to_vec()) else {
            log::error!("surface buffer does not match its declared {w}x{h} size");
            return LoopControl::Stop;
        };

        match img.save(&path) {
            Ok(()) => {
                log::info!("wrote {}", path.display());
                LoopControl::Continue
            }
            Err(e) => {
                log::error!("failed to write {}: {e}", path.display());
                LoopControl::Stop
            }
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging(LoggingConfig {
        env_filter: Some("info".to_string()),
    });

    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("frames"));
    std::fs::create_dir_all(&out)?;

    let config = RuntimeConfig {
        frame_budget: Some(120),
    };
    let presenter = PngPresenter { dir: out, every: 30 };

    Runtime::run(config, Bounce::new(50.0), presenter)
}
