//! Join barrier over a set of in-flight remote calls.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use log::trace;

/// Drives every pushed future to completion on the current task.
///
/// The barrier is released when the outstanding count reaches zero, no matter
/// how each call ended. Outputs come back in completion order, so the last
/// element is the call that resolved last.
pub struct JoinBarrier<F: Future> {
    pending: FuturesUnordered<F>,
}

impl<F: Future> JoinBarrier<F> {
    pub fn new() -> Self {
        Self {
            pending: FuturesUnordered::new(),
        }
    }

    /// Calls not yet resolved.
    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }

    /// Waits for every call, including the slowest.
    pub async fn join(mut self) -> Vec<F::Output> {
        let mut resolved = Vec::with_capacity(self.pending.len());
        while let Some(output) = self.pending.next().await {
            resolved.push(output);
            trace!("{} call(s) outstanding", self.pending.len());
        }
        resolved
    }
}

impl<F: Future> Default for JoinBarrier<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Future> FromIterator<F> for JoinBarrier<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            pending: iter.into_iter().collect(),
        }
    }
}
