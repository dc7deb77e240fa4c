use std::sync::Arc;
use tokio::sync::watch;

struct SlotState<T> {
    value: Option<Arc<T>>,
    closed: bool,
}

/// Holds the latest successfully fetched `T`.
///
/// Starts empty. Every [`publish`](Self::publish) replaces the value under
/// the channel lock, so watchers see either the old value or the new one.
/// Once [`close`](Self::close)d the slot keeps its last value and ignores
/// further publishes.
pub struct ResultSlot<T> {
    tx: watch::Sender<SlotState<T>>,
}

impl<T> ResultSlot<T> {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(SlotState {
            value: None,
            closed: false,
        });
        Self { tx }
    }

    /// Returns `false` if the slot was closed and the value was dropped.
    pub fn publish(&self, value: T) -> bool {
        self.tx.send_if_modified(move |state| {
            if state.closed {
                return false;
            }
            state.value = Some(Arc::new(value));
            true
        })
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.tx.borrow().value.clone()
    }

    pub fn subscribe(&self) -> SlotWatcher<T> {
        SlotWatcher {
            rx: self.tx.subscribe(),
        }
    }

    pub fn close(&self) {
        self.tx.send_if_modified(|state| !std::mem::replace(&mut state.closed, true));
    }

    pub fn is_closed(&self) -> bool {
        self.tx.borrow().closed
    }
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SlotWatcher<T> {
    rx: watch::Receiver<SlotState<T>>,
}

impl<T> SlotWatcher<T> {
    pub fn current(&self) -> Option<Arc<T>> {
        self.rx.borrow().value.clone()
    }

    /// Waits for the next published value. Returns `None` once the slot is
    /// closed or gone.
    pub async fn changed(&mut self) -> Option<Arc<T>> {
        loop {
            self.rx.changed().await.ok()?;
            let state = self.rx.borrow_and_update();
            if state.closed {
                return None;
            }
            if let Some(value) = &state.value {
                return Some(Arc::clone(value));
            }
        }
    }
}

impl<T> Clone for SlotWatcher<T> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
        }
    }
}
