/// Host-side input checks for layouts and viewports.
///
/// Window computation never returns these: violating a precondition there yields an
/// out-of-range window instead. Hosts that want a hard failure call `validate` once when the
/// layout is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("item extent must be greater than zero")]
    ZeroItemExtent,
    #[error("grid column count must be at least one")]
    ZeroColumnCount,
    #[error("viewport extent must be greater than zero")]
    ZeroViewportExtent,
}
