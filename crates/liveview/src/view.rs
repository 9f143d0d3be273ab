#![forbid(unsafe_code)]

//! The render contract.

use liveview_render::Representation;

/// A value that can render itself for display.
///
/// `render` must be a pure function of current state: given the same field
/// values it returns the same [`Representation`], and it performs no side
/// effects. The display plumbing calls it whenever the host's output slot
/// needs fresh content — once per `display()`, once per auto-updated field
/// write.
///
/// There is no default implementation; every concrete view supplies its own.
pub trait View {
    /// Render current state as a displayable representation.
    fn render(&self) -> Representation;
}
