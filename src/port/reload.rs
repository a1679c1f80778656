use crate::domain::LevelSnapshot;
use crate::error::ReloadError;
use std::future::Future;
use std::pin::Pin;

/// The running logging subsystem, as seen by the update path: it can
/// re-apply the persisted levels and report what is currently active.
///
/// This trait is dyn-compatible by using boxed futures instead of
/// `impl Future`.
pub trait LogReloader: Send + Sync {
    /// Apply `snapshot` to the live logging configuration.
    fn apply(
        &self,
        snapshot: LevelSnapshot,
    ) -> Pin<Box<dyn Future<Output = Result<(), ReloadError>> + Send + '_>>;

    /// `(target, level)` pairs currently applied, in apply order.
    fn active_levels(&self) -> Vec<(String, String)>;
}
