//! Foreign Implementations
//!
//! A foreign implementation is one supplied from outside this crate, e.g.
//! by an embedding scripting layer at scene-construction time. It satisfies
//! the `SpectralTexture` / `SpatialVolume` contract through a thin
//! trampoline that holds one callback per required operation and forwards
//! each call unchanged, activity mask included.
//!
//! Every operation is mandatory: the builders refuse to produce an adapter
//! when a callback is missing and report which operation it was, so dispatch
//! errors surface when the scene is built rather than mid-render.

mod texture;
mod volume;

// Re-export
pub use texture::*;
pub use volume::*;

/// Returns the callback for a mandatory operation, or a construction-time
/// error naming the implementation and the missing operation.
///
/// * `callback` - The optional callback.
/// * `kind`     - The implementation kind ("texture" or "volume").
/// * `id`       - The implementation's identifier.
/// * `op`       - The operation name.
pub(crate) fn require<T>(callback: Option<T>, kind: &str, id: &str, op: &str) -> Result<T, String> {
    callback.ok_or_else(|| {
        format!(
            "foreign {} '{}' does not override mandatory operation '{}'",
            kind, id, op
        )
    })
}
