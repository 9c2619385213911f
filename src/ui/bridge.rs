// UiBridge - Marshals worker-thread results onto the UI thread
//
// Widgets may only be touched from the thread running the GUI event loop. Workers
// therefore never call into a view; they post a message instead:
//
// 1. The worker sends the message over an unbounded tokio mpsc channel
// 2. The worker calls the wake hook (Slint: upgrade_in_event_loop on a weak handle)
// 3. The UI thread drains the UiInbox and applies each message serially
//
// The channel is unbounded on purpose: a dropped completion message would leave the
// presenter stuck in its busy state.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

/// Hook that asks the UI event loop to drain its inbox.
pub type WakeFn = Arc<dyn Fn() + Send + Sync>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeError {
    #[error("UI inbox has been dropped")]
    Closed,
}

/// Create a connected bridge/inbox pair.
///
/// # Arguments
/// * `wake` - Called on the posting thread after every message is queued
pub fn ui_channel<M>(wake: WakeFn) -> (UiBridge<M>, UiInbox<M>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UiBridge { tx, wake }, UiInbox { rx })
}

/// Bridge/inbox pair without a wake hook, for front-ends that poll the inbox.
pub fn polled_ui_channel<M>() -> (UiBridge<M>, UiInbox<M>) {
    ui_channel(Arc::new(|| {}))
}

/// Producer side, cloned into every worker.
pub struct UiBridge<M> {
    tx: mpsc::UnboundedSender<M>,
    wake: WakeFn,
}

// Manual Clone implementation to avoid requiring M: Clone
impl<M> Clone for UiBridge<M> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            wake: Arc::clone(&self.wake),
        }
    }
}

impl<M: Send + 'static> UiBridge<M> {
    /// Queue a message for the UI thread and wake the event loop.
    ///
    /// Fails only when the inbox (and so the UI) has gone away.
    pub fn post(&self, message: M) -> Result<(), BridgeError> {
        self.tx.send(message).map_err(|_| BridgeError::Closed)?;
        (self.wake)();
        Ok(())
    }
}

/// Consumer side, owned by a presenter on the UI thread.
pub struct UiInbox<M> {
    rx: mpsc::UnboundedReceiver<M>,
}

impl<M> UiInbox<M> {
    /// Next queued message without blocking.
    pub fn try_next(&mut self) -> Option<M> {
        self.rx.try_recv().ok()
    }

    /// All currently queued messages, in posting order.
    pub fn drain(&mut self) -> Vec<M> {
        let mut messages = Vec::new();
        while let Ok(message) = self.rx.try_recv() {
            messages.push(message);
        }
        messages
    }

    /// Block the calling thread until a message arrives.
    ///
    /// Returns `None` once every bridge is dropped and the queue is empty.
    /// Must not be called from inside an async context.
    pub fn wait_next(&mut self) -> Option<M> {
        self.rx.blocking_recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_post_wakes_and_preserves_order() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let (bridge, mut inbox) = ui_channel::<u32>(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        bridge.post(1).unwrap();
        bridge.clone().post(2).unwrap();

        assert_eq!(wakes.load(Ordering::SeqCst), 2);
        assert_eq!(inbox.drain(), vec![1, 2]);
        assert_eq!(inbox.try_next(), None);
    }

    #[test]
    fn test_post_after_inbox_dropped() {
        let (bridge, inbox) = polled_ui_channel::<u32>();
        drop(inbox);
        assert_eq!(bridge.post(1), Err(BridgeError::Closed));
    }

    #[test]
    fn test_wait_next_across_threads() {
        let (bridge, mut inbox) = polled_ui_channel::<&'static str>();

        std::thread::spawn(move || {
            bridge.post("done").unwrap();
        });

        assert_eq!(inbox.wait_next(), Some("done"));
        assert_eq!(inbox.wait_next(), None);
    }
}
