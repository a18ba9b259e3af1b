use crate::error::SketchError;
use crate::surface::Canvas;

use super::app::{App, LoopControl};
use super::ctx::FrameCtx;

type SetupFn = Box<dyn FnOnce(&mut Canvas) -> Result<(), SketchError>>;
type UpdateFn = Box<dyn FnMut(&mut FrameCtx<'_>) -> Result<(), SketchError>>;

/// Callback-slot sketch: one optional `setup` closure, one optional `update`
/// closure, no named type required.
///
/// ```rust,ignore
/// let mut sketch = Sketch::new();
/// sketch.setup(|canvas| {
///     canvas.background(600, 400, Color::BLACK)?;
///     canvas.center(true)
/// })?;
/// sketch.update(|ctx| ctx.canvas.circle(Vec2::zero(), 50.0, Color::WHITE, true));
/// Runtime::run(RuntimeConfig::default(), sketch, presenter)?;
/// ```
///
/// Sketches holding their own state usually implement [`App`] directly
/// instead; closures here must be `'static`, so shared state goes through
/// `Rc<RefCell<_>>`.
pub struct Sketch {
    on_setup: Option<SetupFn>,
    on_update: Option<UpdateFn>,
    setup_registered: bool,
}

impl Sketch {
    pub fn new() -> Self {
        Self {
            on_setup: None,
            on_update: None,
            setup_registered: false,
        }
    }

    /// Registers the one-time configuration callback.
    ///
    /// A second registration fails with
    /// [`SketchError::SetupAlreadyRegistered`] — the lifecycle has exactly
    /// one configuration phase.
    pub fn setup<F>(&mut self, callback: F) -> Result<(), SketchError>
    where
        F: FnOnce(&mut Canvas) -> Result<(), SketchError> + 'static,
    {
        if self.setup_registered {
            return Err(SketchError::SetupAlreadyRegistered);
        }
        self.setup_registered = true;
        self.on_setup = Some(Box::new(callback));
        Ok(())
    }

    /// Registers the per-frame callback. Registering again before the loop
    /// starts replaces the previous callback.
    pub fn update<F>(&mut self, callback: F)
    where
        F: FnMut(&mut FrameCtx<'_>) -> Result<(), SketchError> + 'static,
    {
        self.on_update = Some(Box::new(callback));
    }
}

impl App for Sketch {
    fn setup(&mut self, canvas: &mut Canvas) -> Result<(), SketchError> {
        // take(): the closure is FnOnce and must never run twice.
        match self.on_setup.take() {
            Some(callback) => callback(canvas),
            None => Ok(()),
        }
    }

    fn frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<LoopControl, SketchError> {
        if let Some(callback) = &mut self.on_update {
            callback(ctx)?;
        }
        Ok(LoopControl::Continue)
    }
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_setup_registration_fails() {
        let mut sketch = Sketch::new();
        sketch.setup(|_| Ok(())).unwrap();
        assert_eq!(
            sketch.setup(|_| Ok(())).unwrap_err(),
            SketchError::SetupAlreadyRegistered,
        );
    }

    #[test]
    fn setup_slot_stays_claimed_even_after_the_callback_ran() {
        let mut sketch = Sketch::new();
        sketch.setup(|_| Ok(())).unwrap();

        let mut canvas = Canvas::new();
        App::setup(&mut sketch, &mut canvas).unwrap();

        // The slot was consumed by the run, but re-registration is still a
        // double-setup: the configuration phase happens once.
        assert!(sketch.setup(|_| Ok(())).is_err());
    }

    #[test]
    fn setup_without_registration_is_a_no_op() {
        let mut sketch = Sketch::new();
        let mut canvas = Canvas::new();
        assert!(App::setup(&mut sketch, &mut canvas).is_ok());
    }

    #[test]
    fn update_registration_replaces_the_previous_callback() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let hits = Rc::new(RefCell::new((0, 0)));

        let mut sketch = Sketch::new();
        let h = hits.clone();
        sketch.update(move |_| {
            h.borrow_mut().0 += 1;
            Ok(())
        });
        let h = hits.clone();
        sketch.update(move |_| {
            h.borrow_mut().1 += 1;
            Ok(())
        });

        let mut canvas = Canvas::new();
        let mut runtime = crate::runtime::RuntimeCtx::default();
        let mut ctx = FrameCtx {
            canvas: &mut canvas,
            time: crate::time::FrameClock::new().tick(),
            runtime: &mut runtime,
        };
        sketch.frame(&mut ctx).unwrap();

        assert_eq!(*hits.borrow(), (0, 1));
    }
}
