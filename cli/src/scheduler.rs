//! Tokio-backed timers for the upload controller.
//!
//! Ticks run as local tasks, so the scheduler must be used from inside a
//! [`tokio::task::LocalSet`].

use std::time::Duration;

use proconverter::Scheduler;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

/// Repeating timer; aborted when dropped.
#[derive(Debug)]
pub struct TokioInterval {
    task: JoinHandle<()>,
}

impl Drop for TokioInterval {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl Scheduler for TokioScheduler {
    type Interval = TokioInterval;

    fn every(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> TokioInterval {
        let task = tokio::task::spawn_local(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first tick completes immediately; the first advance comes one period in
            interval.tick().await;
            loop {
                interval.tick().await;
                tick();
            }
        });
        TokioInterval { task }
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
