//! Shared test support utilities
//!
//! Provides a `MockReloader` implementing `LogReloader` for use in unit and
//! integration tests.

use crate::domain::{LevelSnapshot, ROOT_LOGGER};
use crate::error::ReloadError;
use crate::port::LogReloader;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock reload collaborator that captures every applied snapshot.
#[derive(Default)]
pub struct MockReloader {
    applied: Arc<Mutex<Vec<LevelSnapshot>>>,
    should_fail: AtomicBool,
}

impl MockReloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn applied(&self) -> Vec<LevelSnapshot> {
        self.applied.lock().unwrap().clone()
    }

    pub fn apply_count(&self) -> usize {
        self.applied.lock().unwrap().len()
    }
}

impl LogReloader for MockReloader {
    fn apply(
        &self,
        snapshot: LevelSnapshot,
    ) -> Pin<Box<dyn Future<Output = Result<(), ReloadError>> + Send + '_>> {
        let applied = self.applied.clone();
        Box::pin(async move {
            if self.should_fail.load(Ordering::SeqCst) {
                return Err(ReloadError::Swap("Mock reload failure".to_string()));
            }
            applied.lock().unwrap().push(snapshot);
            Ok(())
        })
    }

    fn active_levels(&self) -> Vec<(String, String)> {
        let applied = self.applied.lock().unwrap();
        let Some(last) = applied.last() else {
            return Vec::new();
        };

        let mut levels = Vec::new();
        if let Some(root) = &last.root_level {
            levels.push((ROOT_LOGGER.to_string(), root.clone()));
        }
        for logger in &last.loggers {
            levels.push((logger.target.clone(), logger.level.clone()));
        }
        levels
    }
}
