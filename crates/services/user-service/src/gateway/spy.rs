//! Recording gateway wrapper with per-id canned answers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use domain::GatewayError;

use super::DeletionGateway;

/// Wraps another gateway, recording every requested id.
///
/// Ids with a canned answer never reach the delegate; all other requests
/// are forwarded and their result (or failure) is returned as is.
pub struct SpyDeletionGateway {
    delegate: Arc<dyn DeletionGateway>,
    answers: Mutex<HashMap<i32, bool>>,
    captured: Mutex<Vec<i32>>,
}

impl SpyDeletionGateway {
    pub fn new(delegate: Arc<dyn DeletionGateway>) -> Self {
        Self {
            delegate,
            answers: Mutex::new(HashMap::new()),
            captured: Mutex::new(Vec::new()),
        }
    }

    /// Answer `deleted` for `id` instead of asking the delegate
    pub fn answer(&self, id: i32, deleted: bool) {
        lock(&self.answers).insert(id, deleted);
    }

    /// Builder form of [`Self::answer`]
    pub fn with_answer(self, id: i32, deleted: bool) -> Self {
        self.answer(id, deleted);
        self
    }

    /// Ids passed to `delete`, in call order
    pub fn captured(&self) -> Vec<i32> {
        lock(&self.captured).clone()
    }

    pub fn last_captured(&self) -> Option<i32> {
        lock(&self.captured).last().copied()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.captured).len()
    }
}

impl std::fmt::Debug for SpyDeletionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpyDeletionGateway")
            .field("answers", &*lock(&self.answers))
            .field("captured", &*lock(&self.captured))
            .finish_non_exhaustive()
    }
}

impl DeletionGateway for SpyDeletionGateway {
    fn delete(&self, id: i32) -> Result<bool, GatewayError> {
        lock(&self.captured).push(id);

        let canned = lock(&self.answers).get(&id).copied();
        match canned {
            Some(deleted) => Ok(deleted),
            None => self.delegate.delete(id),
        }
    }
}

// A panic while holding the lock cannot leave the map or vec half-updated.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
