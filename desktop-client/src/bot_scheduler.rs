use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BotTurnReady {
    ticket: u64,
}

/// Delays the computer's turn off the UI thread. The search itself still runs
/// on the UI thread once `poll_ready` reports the delay as elapsed.
pub struct BotScheduler {
    runtime: Runtime,
    ready_tx: mpsc::UnboundedSender<BotTurnReady>,
    ready_rx: mpsc::UnboundedReceiver<BotTurnReady>,
    delay: Duration,
    next_ticket: u64,
    pending: Option<u64>,
}

impl BotScheduler {
    pub fn new(delay: Duration) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("bot-scheduler")
            .enable_time()
            .build()?;
        let (ready_tx, ready_rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            ready_tx,
            ready_rx,
            delay,
            next_ticket: 0,
            pending: None,
        })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts the thinking delay unless one is already running. `on_ready` runs
    /// on the runtime thread after the signal is queued (used to wake the UI).
    pub fn schedule<F>(&mut self, on_ready: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.pending.is_some() {
            return;
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending = Some(ticket);

        let ready_tx = self.ready_tx.clone();
        let delay = self.delay;
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if ready_tx.send(BotTurnReady { ticket }).is_ok() {
                on_ready();
            }
        });
    }

    /// Drops the pending turn; its signal is ignored when it arrives.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn poll_ready(&mut self) -> bool {
        let mut ready = false;
        while let Ok(signal) = self.ready_rx.try_recv() {
            if self.pending == Some(signal.ticket) {
                self.pending = None;
                ready = true;
            }
        }
        ready
    }
}
