//! Spin task management
//!
//! Runs a spin sequence on a tokio task, streaming reveals through an
//! mpsc channel and sleeping the step delay between them so the event
//! loop stays responsive. Every started spin gets a fresh generation
//! number; the controller only applies updates from the latest
//! generation, so a superseded spin can never write a stale result.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::chooser::{step_delay, SpinSequence, SpinStep};

/// Progress update from a running spin task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinUpdate {
    /// Intermediate decoy reveal
    Reveal {
        value: String,
        step: usize,
        total: usize,
    },
    /// Final outcome; the task ends after sending this
    Settled { value: String },
}

/// Handle to a running spin task
#[derive(Debug)]
pub struct SpinHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl SpinHandle {
    /// Generation number of this spin
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop delivering further steps. The sequence is abandoned, not
    /// resumed later.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Whether the task has finished (settled or aborted)
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns spin tasks and hands out generation numbers
#[derive(Debug, Default)]
pub struct SpinDriver {
    next_generation: u64,
}

impl SpinDriver {
    /// Create a new driver
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a task that walks `sequence`, sending each step tagged
    /// with its generation and pacing reveals with `step_delay`.
    pub fn start(
        &mut self,
        sequence: SpinSequence,
        base_delay: Duration,
        tx: mpsc::Sender<(u64, SpinUpdate)>,
    ) -> SpinHandle {
        self.next_generation += 1;
        let generation = self.next_generation;

        let task = tokio::spawn(async move {
            for item in sequence {
                match item {
                    SpinStep::Reveal { value, step, total } => {
                        let update = SpinUpdate::Reveal { value, step, total };
                        if tx.send((generation, update)).await.is_err() {
                            // Receiver dropped; nobody is watching
                            return;
                        }
                        tokio::time::sleep(step_delay(base_delay, step)).await;
                    }
                    SpinStep::Settle { value } => {
                        let _ = tx.send((generation, SpinUpdate::Settled { value })).await;
                    }
                }
            }
        });

        SpinHandle { generation, task }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chooser::Chooser;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_driver_delivers_reveals_then_settle() {
        let mut chooser = Chooser::from_seed(5);
        let opts = options(&["Pizza", "Sushi", "Tacos"]);
        let sequence = chooser.spin(&opts, 4).unwrap();

        let mut driver = SpinDriver::new();
        let (tx, mut rx) = mpsc::channel(8);
        let handle = driver.start(sequence, Duration::from_millis(10), tx);

        let mut updates = Vec::new();
        while let Some((generation, update)) = rx.recv().await {
            assert_eq!(generation, handle.generation());
            updates.push(update);
        }

        assert_eq!(updates.len(), 5);
        for (i, update) in updates.iter().take(4).enumerate() {
            match update {
                SpinUpdate::Reveal { step, total, value } => {
                    assert_eq!(*step, i);
                    assert_eq!(*total, 4);
                    assert!(opts.contains(value));
                }
                SpinUpdate::Settled { .. } => panic!("settled before the last step"),
            }
        }
        assert!(matches!(updates.last(), Some(SpinUpdate::Settled { .. })));
    }

    #[tokio::test]
    async fn test_generations_increase_per_start() {
        let opts = options(&["A"]);
        let mut driver = SpinDriver::new();

        let (tx1, mut rx1) = mpsc::channel(8);
        let first = driver.start(
            Chooser::from_seed(1).spin(&opts, 1).unwrap(),
            Duration::from_millis(10),
            tx1,
        );
        let (tx2, mut rx2) = mpsc::channel(8);
        let second = driver.start(
            Chooser::from_seed(2).spin(&opts, 1).unwrap(),
            Duration::from_millis(10),
            tx2,
        );

        assert!(second.generation() > first.generation());

        // Updates arrive tagged with the generation of their spin
        let (g1, _) = rx1.recv().await.unwrap();
        let (g2, _) = rx2.recv().await.unwrap();
        assert_eq!(g1, first.generation());
        assert_eq!(g2, second.generation());
    }

    #[tokio::test]
    async fn test_abort_stops_delivery() {
        let opts = options(&["A", "B"]);
        let mut driver = SpinDriver::new();
        let (tx, mut rx) = mpsc::channel(8);
        let handle = driver.start(
            Chooser::from_seed(3).spin(&opts, 10).unwrap(),
            Duration::from_millis(10),
            tx,
        );

        // First reveal arrives, then the spin is abandoned
        let first = rx.recv().await;
        assert!(first.is_some());
        handle.abort();

        // The channel closes without a settle
        let mut saw_settle = false;
        while let Some((_, update)) = rx.recv().await {
            if matches!(update, SpinUpdate::Settled { .. }) {
                saw_settle = true;
            }
        }
        assert!(!saw_settle);
    }
}
