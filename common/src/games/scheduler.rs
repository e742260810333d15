use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// A single cancellable repeating trigger. Arming always replaces whatever
/// was armed before, so at most one trigger is live at a time.
pub trait TickScheduler {
    fn arm(&mut self, interval: Duration);
    fn cancel(&mut self);
    fn is_armed(&self) -> bool;
    fn interval(&self) -> Option<Duration>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSignal {
    pub generation: u64,
}

type WakeFn = Arc<dyn Fn() + Send + Sync>;

/// Runs the trigger as a tokio task that pushes [`TickSignal`]s into a channel.
/// The receiver must pass each signal through [`TokioTickScheduler::accepts`]:
/// signals queued by a trigger that has since been cancelled carry a stale
/// generation and are dropped.
///
/// At most one signal per trigger is in flight. Fires that land while the
/// previous signal has not been accepted yet are skipped, so a receiver that
/// stalls sees a single late tick instead of a burst.
pub struct TokioTickScheduler {
    handle: Handle,
    tx: mpsc::UnboundedSender<TickSignal>,
    wake: Option<WakeFn>,
    generation: u64,
    active: Option<ActiveTrigger>,
}

struct ActiveTrigger {
    task: JoinHandle<()>,
    interval: Duration,
    pending: Arc<AtomicBool>,
}

impl TokioTickScheduler {
    pub fn new(handle: Handle, tx: mpsc::UnboundedSender<TickSignal>) -> Self {
        Self {
            handle,
            tx,
            wake: None,
            generation: 0,
            active: None,
        }
    }

    /// Called after every signal is sent, e.g. to wake a UI event loop.
    pub fn with_wake(mut self, wake: impl Fn() + Send + Sync + 'static) -> Self {
        self.wake = Some(Arc::new(wake));
        self
    }

    /// Accepting a signal from the live trigger lets it send the next one.
    pub fn accepts(&self, signal: TickSignal) -> bool {
        match &self.active {
            Some(active) if signal.generation == self.generation => {
                active.pending.store(false, Ordering::Release);
                true
            }
            _ => false,
        }
    }
}

impl TickScheduler for TokioTickScheduler {
    fn arm(&mut self, interval: Duration) {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let tx = self.tx.clone();
        let wake = self.wake.clone();
        let pending = Arc::new(AtomicBool::new(false));
        let task_pending = pending.clone();

        let task = self.handle.spawn(async move {
            let mut timer = interval_at(Instant::now() + interval, interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                timer.tick().await;
                if tx.is_closed() {
                    break;
                }
                if task_pending.swap(true, Ordering::AcqRel) {
                    continue;
                }
                if tx.send(TickSignal { generation }).is_err() {
                    break;
                }
                if let Some(wake) = &wake {
                    wake();
                }
            }
        });

        self.active = Some(ActiveTrigger { task, interval, pending });
    }

    fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            active.task.abort();
        }
    }

    fn is_armed(&self) -> bool {
        self.active.is_some()
    }

    fn interval(&self) -> Option<Duration> {
        self.active.as_ref().map(|active| active.interval)
    }
}

impl Drop for TokioTickScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Headless scheduler: records what would have been armed, never fires on its
/// own. The owner drives ticks by hand.
#[derive(Debug, Default)]
pub struct ManualTickScheduler {
    armed: Option<Duration>,
    arm_count: usize,
    cancel_count: usize,
}

impl ManualTickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm_count(&self) -> usize {
        self.arm_count
    }

    pub fn cancel_count(&self) -> usize {
        self.cancel_count
    }
}

impl TickScheduler for ManualTickScheduler {
    fn arm(&mut self, interval: Duration) {
        self.cancel();
        self.armed = Some(interval);
        self.arm_count += 1;
    }

    fn cancel(&mut self) {
        if self.armed.take().is_some() {
            self.cancel_count += 1;
        }
    }

    fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    fn interval(&self) -> Option<Duration> {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn drain(rx: &mut mpsc::UnboundedReceiver<TickSignal>) -> Vec<TickSignal> {
        let mut signals = vec![];
        while let Ok(signal) = rx.try_recv() {
            signals.push(signal);
        }
        signals
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_signal_after_one_full_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioTickScheduler::new(Handle::current(), tx);
        scheduler.arm(Duration::from_millis(100));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(drain(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_millis(60)).await;
        let signals = drain(&mut rx);
        assert_eq!(signals.len(), 1);
        assert!(scheduler.accepts(signals[0]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_previous_trigger() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioTickScheduler::new(Handle::current(), tx);

        scheduler.arm(Duration::from_millis(100));
        scheduler.arm(Duration::from_millis(100));
        assert_eq!(scheduler.interval(), Some(Duration::from_millis(100)));

        tokio::time::sleep(Duration::from_millis(150)).await;
        let signals = drain(&mut rx);
        assert_eq!(signals.len(), 1);
        assert!(scheduler.accepts(signals[0]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_signals_and_rejects_queued_ones() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioTickScheduler::new(Handle::current(), tx);
        scheduler.arm(Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(25)).await;
        scheduler.cancel();
        assert!(!scheduler.is_armed());

        let queued = drain(&mut rx);
        assert_eq!(queued.len(), 1);
        assert!(!scheduler.accepts(queued[0]));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_signal_from_old_generation_rejected_after_rearm() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioTickScheduler::new(Handle::current(), tx);
        scheduler.arm(Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(15)).await;

        scheduler.arm(Duration::from_millis(8));
        let stale = drain(&mut rx);
        assert_eq!(stale.len(), 1);
        assert!(!scheduler.accepts(stale[0]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wake_called_per_signal() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let wakes = Arc::new(AtomicUsize::new(0));
        let wakes_clone = wakes.clone();
        let mut scheduler = TokioTickScheduler::new(Handle::current(), tx)
            .with_wake(move || {
                wakes_clone.fetch_add(1, Ordering::SeqCst);
            });

        scheduler.arm(Duration::from_millis(10));
        for _ in 0..4 {
            tokio::time::sleep(Duration::from_millis(11)).await;
            for signal in drain(&mut rx) {
                assert!(scheduler.accepts(signal));
            }
        }
        assert_eq!(wakes.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_receiver_sees_one_tick_not_a_backlog() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioTickScheduler::new(Handle::current(), tx);
        scheduler.arm(Duration::from_millis(150));

        tokio::time::sleep(Duration::from_secs(3)).await;
        let signals = drain(&mut rx);
        assert_eq!(signals.len(), 1);
        assert!(scheduler.accepts(signals[0]));

        tokio::time::sleep(Duration::from_millis(160)).await;
        let signals = drain(&mut rx);
        assert_eq!(signals.len(), 1);
        assert!(scheduler.accepts(signals[0]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_signal_does_not_unblock_new_trigger() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioTickScheduler::new(Handle::current(), tx);
        scheduler.arm(Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(15)).await;
        scheduler.arm(Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(55)).await;
        let signals = drain(&mut rx);
        assert_eq!(signals.len(), 2);
        assert!(!scheduler.accepts(signals[0]));
        assert!(scheduler.accepts(signals[1]));
    }

    #[test]
    fn test_manual_scheduler_counts_replacements() {
        let mut scheduler = ManualTickScheduler::new();
        scheduler.arm(Duration::from_millis(150));
        scheduler.arm(Duration::from_millis(148));
        assert_eq!(scheduler.arm_count(), 2);
        assert_eq!(scheduler.cancel_count(), 1);
        assert_eq!(scheduler.interval(), Some(Duration::from_millis(148)));

        scheduler.cancel();
        scheduler.cancel();
        assert_eq!(scheduler.cancel_count(), 2);
        assert!(!scheduler.is_armed());
    }
}
