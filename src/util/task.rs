use std::collections::HashMap;
use std::future::Future;

use tokio::task::JoinHandle;

/// Keyed fetch tasks. Spawning under an occupied key aborts the previous
/// task, so at most one request per concern stays in flight; the session's
/// request tokens still guard against any resolution that slips through.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&mut self, key: &'static str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.tasks.insert(key, tokio::spawn(future)) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}
