use std::fmt;

/// A contract violation surfaced at the call site that committed it.
///
/// Every variant is a programmer-usage error: nothing here is retryable and
/// the engine performs no I/O that could fail transiently.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchError {
    /// A color literal did not parse as `#rgb`, `#rrggbb` or `#rrggbbaa`.
    InvalidColorFormat {
        /// The offending literal, verbatim.
        literal: String,
    },
    /// A surface operation or drawing primitive ran before any
    /// `background` call established the surface.
    SurfaceNotInitialized,
    /// `Sketch::setup` was called a second time.
    SetupAlreadyRegistered,
    /// `background` was asked for a surface with a zero extent.
    InvalidSurfaceSize { width: u32, height: u32 },
    /// Font bytes could not be parsed.
    FontLoad(String),
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::InvalidColorFormat { literal } => {
                write!(f, "invalid color literal {literal:?}: expected #rgb, #rrggbb or #rrggbbaa")
            }
            SketchError::SurfaceNotInitialized => {
                write!(f, "no surface: call background() before drawing")
            }
            SketchError::SetupAlreadyRegistered => {
                write!(f, "setup callback is already registered")
            }
            SketchError::InvalidSurfaceSize { width, height } => {
                write!(f, "surface size {width}x{height} has a zero extent")
            }
            SketchError::FontLoad(reason) => {
                write!(f, "font load error: {reason}")
            }
        }
    }
}

impl std::error::Error for SketchError {}
