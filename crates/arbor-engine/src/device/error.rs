/// What the runtime should do after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame can be drawn.
    Reconfigured,
    /// Transient; drop this frame.
    SkipFrame,
    /// Out of memory; shut down.
    Fatal,
}
