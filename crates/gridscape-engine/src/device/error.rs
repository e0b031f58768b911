/// What the frame loop does after `get_current_texture` fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Lost or outdated surface, reconfigured at the current window size.
    /// The grid is redrawn on the next redraw request.
    Reconfigured,
    /// Timeout or an unclassified error; this frame is dropped and the camera keeps its state.
    SkipFrame,
    /// Out of memory; the runtime exits.
    Fatal,
}
