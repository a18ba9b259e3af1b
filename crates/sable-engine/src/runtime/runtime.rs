use anyhow::{Context, Result};

use crate::core::{App, FrameCtx, LoopControl};
use crate::surface::Canvas;
use crate::time::FrameClock;

use super::presenter::Presenter;

/// Loop lifecycle states, in the order they are entered.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    /// No callback has run yet.
    Idle,
    /// The setup callback ran to completion.
    Configured,
    /// Update callbacks are being scheduled.
    Running,
    /// No further update will be scheduled.
    Stopped,
}

/// Runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Stop after this many frames. `None` runs until a stop request arrives
    /// from the sketch or the presenter.
    pub frame_budget: Option<u64>,
}

/// Handle for requesting loop actions from inside a frame callback.
///
/// Commands are buffered and applied after the current callback returns —
/// nothing cancels mid-frame.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    /// Requests that the loop stop once the current frame completes.
    pub fn stop(&mut self) {
        self.commands.push(Command::Stop);
    }
}

enum Command {
    Stop,
}

/// Entry point for the frame loop.
pub struct Runtime;

impl Runtime {
    /// Drives `app` to completion: `setup` exactly once, then one `frame`
    /// per tick until a stop request or the frame budget lands.
    ///
    /// A callback error aborts the loop and propagates out of `run`.
    pub fn run<A, P>(config: RuntimeConfig, mut app: A, mut presenter: P) -> Result<()>
    where
        A: App,
        P: Presenter,
    {
        let mut state = LoopState::Idle;
        let mut canvas = Canvas::new();

        app.setup(&mut canvas).context("setup callback failed")?;
        transition(&mut state, LoopState::Configured);

        let mut clock = FrameClock::default();
        let mut frames: u64 = 0;
        transition(&mut state, LoopState::Running);

        while state == LoopState::Running {
            if config.frame_budget.is_some_and(|budget| frames >= budget) {
                transition(&mut state, LoopState::Stopped);
                break;
            }

            let time = clock.tick();
            let mut runtime_ctx = RuntimeCtx::default();

            let control = {
                let mut ctx = FrameCtx {
                    canvas: &mut canvas,
                    time,
                    runtime: &mut runtime_ctx,
                };
                app.frame(&mut ctx).context("frame callback failed")?
            };
            frames += 1;

            // Present after the update has fully returned. A sketch that
            // never declared a surface has nothing to show yet.
            let mut stop = control == LoopControl::Stop;
            if let Ok(surface) = canvas.surface() {
                stop |= presenter.present(surface, time) == LoopControl::Stop;
            }
            for cmd in runtime_ctx.commands.drain(..) {
                match cmd {
                    Command::Stop => stop = true,
                }
            }

            if stop {
                transition(&mut state, LoopState::Stopped);
            }
        }

        log::debug!("loop stopped after {frames} frame(s)");
        Ok(())
    }
}

fn transition(state: &mut LoopState, next: LoopState) {
    debug_assert!(
        matches!(
            (*state, next),
            (LoopState::Idle, LoopState::Configured)
                | (LoopState::Configured, LoopState::Running)
                | (LoopState::Running, LoopState::Stopped)
        ),
        "illegal loop transition {state:?} -> {next:?}",
    );
    log::debug!("loop state: {:?} -> {next:?}", *state);
    *state = next;
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::coords::Vec2;
    use crate::core::Sketch;
    use crate::error::SketchError;
    use crate::paint::Color;
    use crate::runtime::DiscardPresenter;
    use crate::surface::Surface;
    use crate::time::FrameTime;

    /// Appends one event per present and stops once a quota is reached.
    struct RecordingPresenter {
        events: Rc<RefCell<Vec<&'static str>>>,
        stop_after: Option<u64>,
        presented: u64,
    }

    impl Presenter for RecordingPresenter {
        fn present(&mut self, _surface: &Surface, _time: FrameTime) -> LoopControl {
            self.events.borrow_mut().push("present");
            self.presented += 1;
            match self.stop_after {
                Some(n) if self.presented >= n => LoopControl::Stop,
                _ => LoopControl::Continue,
            }
        }
    }

    fn events() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    // ── lifecycle ordering ────────────────────────────────────────────────

    #[test]
    fn setup_runs_once_before_the_first_update() {
        let log = events();

        let mut sketch = Sketch::new();
        let l = log.clone();
        sketch
            .setup(move |canvas| {
                l.borrow_mut().push("setup");
                canvas.background(64, 64, Color::BLACK)
            })
            .unwrap();
        let l = log.clone();
        sketch.update(move |_| {
            l.borrow_mut().push("update");
            Ok(())
        });

        let config = RuntimeConfig { frame_budget: Some(3) };
        Runtime::run(config, sketch, DiscardPresenter).unwrap();

        assert_eq!(*log.borrow(), ["setup", "update", "update", "update"]);
    }

    #[test]
    fn presenter_runs_after_each_update() {
        let log = events();

        let mut sketch = Sketch::new();
        let l = log.clone();
        sketch
            .setup(move |canvas| canvas.background(32, 32, Color::BLACK))
            .unwrap();
        sketch.update(move |_| {
            l.borrow_mut().push("update");
            Ok(())
        });

        let presenter = RecordingPresenter {
            events: log.clone(),
            stop_after: None,
            presented: 0,
        };
        let config = RuntimeConfig { frame_budget: Some(2) };
        Runtime::run(config, sketch, presenter).unwrap();

        assert_eq!(*log.borrow(), ["update", "present", "update", "present"]);
    }

    #[test]
    fn zero_frame_budget_schedules_nothing() {
        let log = events();

        let mut sketch = Sketch::new();
        let l = log.clone();
        sketch.update(move |_| {
            l.borrow_mut().push("update");
            Ok(())
        });

        let config = RuntimeConfig { frame_budget: Some(0) };
        Runtime::run(config, sketch, DiscardPresenter).unwrap();
        assert!(log.borrow().is_empty());
    }

    // ── stop requests ─────────────────────────────────────────────────────

    #[test]
    fn runtime_ctx_stop_finishes_the_current_frame_only() {
        let frames = Rc::new(RefCell::new(0_u64));

        let mut sketch = Sketch::new();
        sketch
            .setup(|canvas| canvas.background(32, 32, Color::BLACK))
            .unwrap();
        let f = frames.clone();
        sketch.update(move |ctx| {
            *f.borrow_mut() += 1;
            ctx.runtime.stop();
            Ok(())
        });

        Runtime::run(RuntimeConfig::default(), sketch, DiscardPresenter).unwrap();
        assert_eq!(*frames.borrow(), 1);
    }

    #[test]
    fn presenter_stop_tears_the_loop_down() {
        let log = events();

        let mut sketch = Sketch::new();
        sketch
            .setup(|canvas| canvas.background(32, 32, Color::BLACK))
            .unwrap();
        sketch.update(|_| Ok(()));

        let presenter = RecordingPresenter {
            events: log.clone(),
            stop_after: Some(2),
            presented: 0,
        };
        Runtime::run(RuntimeConfig::default(), sketch, presenter).unwrap();
        assert_eq!(*log.borrow(), ["present", "present"]);
    }

    #[test]
    fn presenter_is_skipped_until_a_surface_exists() {
        let log = events();

        // No setup: the sketch never declares a surface.
        let mut sketch = Sketch::new();
        sketch.update(|_| Ok(()));

        let presenter = RecordingPresenter {
            events: log.clone(),
            stop_after: None,
            presented: 0,
        };
        let config = RuntimeConfig { frame_budget: Some(2) };
        Runtime::run(config, sketch, presenter).unwrap();
        assert!(log.borrow().is_empty());
    }

    // ── failure propagation ───────────────────────────────────────────────

    #[test]
    fn drawing_before_background_aborts_the_run() {
        let mut sketch = Sketch::new();
        sketch.update(|ctx| ctx.canvas.circle(Vec2::zero(), 10.0, Color::WHITE, true));

        let err = Runtime::run(RuntimeConfig::default(), sketch, DiscardPresenter).unwrap_err();
        let source = err.downcast_ref::<SketchError>();
        assert_eq!(source, Some(&SketchError::SurfaceNotInitialized));
    }

    #[test]
    fn setup_failure_never_schedules_a_frame() {
        let frames = Rc::new(RefCell::new(0_u64));

        let mut sketch = Sketch::new();
        sketch
            .setup(|canvas| canvas.background(0, 0, Color::BLACK))
            .unwrap();
        let f = frames.clone();
        sketch.update(move |_| {
            *f.borrow_mut() += 1;
            Ok(())
        });

        assert!(Runtime::run(RuntimeConfig::default(), sketch, DiscardPresenter).is_err());
        assert_eq!(*frames.borrow(), 0);
    }

    // ── end to end ────────────────────────────────────────────────────────

    #[test]
    fn bouncing_circle_wraps_after_a_full_traversal() {
        let r = 50.0;
        let loc = Rc::new(RefCell::new(Vec2::zero()));
        let wraps = Rc::new(RefCell::new(0_u32));

        let mut sketch = Sketch::new();
        let l = loc.clone();
        sketch
            .setup(move |canvas| {
                canvas.background(600, 400, Color::BLACK)?;
                canvas.center(true)?;
                *l.borrow_mut() = Vec2::new(r, canvas.height()? / 2.0);
                Ok(())
            })
            .unwrap();

        let l = loc.clone();
        let w = wraps.clone();
        sketch.update(move |ctx| {
            let mut loc = l.borrow_mut();
            ctx.canvas.circle(*loc, r, Color::WHITE, true)?;
            loc.translate(Vec2::new(5.0, 0.0));
            if loc.x - r >= ctx.canvas.width()? {
                loc.x = -r;
                *w.borrow_mut() += 1;
            }
            Ok(())
        });

        // width() is 300 under the centered convention; x starts at 50 and
        // wraps once it reaches 350, i.e. on exactly the 60th update.
        let config = RuntimeConfig { frame_budget: Some(60) };
        Runtime::run(config, sketch, DiscardPresenter).unwrap();

        assert_eq!(*wraps.borrow(), 1);
        assert_eq!(loc.borrow().x, -r);
    }
}
