use dnslookup_domain::LookupError;
use std::future::Future;
use tokio::sync::OnceCell;

/// Fill-once cache cell for one record kind
///
/// Reading a filled slot takes no lock. Concurrent callers that find the
/// slot empty are serialized: one runs its fill, the rest wait for it. A
/// failed fill leaves the slot empty and the next waiter (or the next call)
/// runs its own fill. Once filled, the value is never replaced.
pub struct RecordSlot<T> {
    cell: OnceCell<T>,
}

impl<T: Clone> RecordSlot<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn cached(&self) -> Option<T> {
        self.cell.get().cloned()
    }

    pub fn is_cached(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn get_or_fill<F, Fut>(&self, fill: F) -> Result<T, LookupError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, LookupError>>,
    {
        self.cell.get_or_try_init(fill).await.cloned()
    }
}

impl<T: Clone> Default for RecordSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
