//! Offload-and-deliver: run store work on the background runtime, run the
//! caller's callbacks on the delivery context.
//!
//! The delivery context is a queue of callbacks. Whoever owns the
//! [`DeliveryQueue`] (a UI thread, the main task of a binary, a test) drains it,
//! so callbacks never run on the runtime's worker threads.

use crate::errors::{Error, Result};
use std::future::Future;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, warn};

type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Creates a connected delivery context and the queue that drains it.
#[must_use]
pub fn delivery_channel() -> (DeliveryContext, DeliveryQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DeliveryContext { tx }, DeliveryQueue { rx })
}

/// Sending side of the delivery queue. Cheap to clone.
#[derive(Clone, Debug)]
pub struct DeliveryContext {
    tx: mpsc::UnboundedSender<Callback>,
}

impl DeliveryContext {
    /// Queues `callback` to run on the delivery context.
    pub fn post<F>(&self, callback: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.tx
            .send(Box::new(callback))
            .map_err(|_| Error::DeliveryClosed)
    }
}

/// Receiving side of the delivery queue; runs callbacks where it is drained.
#[derive(Debug)]
pub struct DeliveryQueue {
    rx: mpsc::UnboundedReceiver<Callback>,
}

impl DeliveryQueue {
    /// Waits for the next callback and runs it. Returns `false` once every
    /// [`DeliveryContext`] is gone and the queue is empty.
    pub async fn deliver_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Blocking form of [`deliver_next`](Self::deliver_next) for a thread that
    /// is not driven by the runtime.
    ///
    /// # Panics
    /// Panics if called from within an asynchronous execution context.
    pub fn blocking_deliver_next(&mut self) -> bool {
        match self.rx.blocking_recv() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Runs every callback already queued without waiting. Returns how many ran.
    pub fn drain_ready(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(callback) = self.rx.try_recv() {
            callback();
            ran += 1;
        }
        ran
    }

    /// Delivers until every [`DeliveryContext`] has been dropped.
    pub async fn run(mut self) {
        while self.deliver_next().await {}
        debug!("Delivery queue closed.");
    }
}

/// Submits store work to the background runtime and routes its outcome to the
/// delivery context.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    background: Handle,
    delivery: DeliveryContext,
}

impl Dispatcher {
    /// Binds a background runtime handle to a delivery context.
    #[must_use]
    pub const fn new(background: Handle, delivery: DeliveryContext) -> Self {
        Self {
            background,
            delivery,
        }
    }

    /// Uses the runtime the caller is running on as the background context.
    ///
    /// # Panics
    /// Panics when called outside a `tokio` runtime.
    #[must_use]
    pub fn current(delivery: DeliveryContext) -> Self {
        Self::new(Handle::current(), delivery)
    }

    /// The delivery context callbacks are posted to.
    #[must_use]
    pub const fn delivery(&self) -> &DeliveryContext {
        &self.delivery
    }

    /// Runs `work` in the background; exactly one of `on_success` and
    /// `on_error` is then run on the delivery context.
    ///
    /// Nothing is reported synchronously. A panic inside `work` is reported to
    /// `on_error` as [`Error::Task`]. If the delivery queue has been dropped by
    /// the time `work` finishes, the outcome is discarded.
    pub fn submit<T, W, S, E>(&self, work: W, on_success: S, on_error: E)
    where
        T: Send + 'static,
        W: Future<Output = Result<T>> + Send + 'static,
        S: FnOnce(T) + Send + 'static,
        E: FnOnce(Error) + Send + 'static,
    {
        let delivery = self.delivery.clone();
        self.background.spawn(async move {
            let outcome = match tokio::spawn(work).await {
                Ok(outcome) => outcome,
                Err(join_err) => Err(Error::Task(join_err)),
            };
            let posted = delivery.post(move || match outcome {
                Ok(value) => on_success(value),
                Err(err) => on_error(err),
            });
            if posted.is_err() {
                warn!("Delivery queue dropped before a result could be delivered");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    #[tokio::test]
    async fn test_success_reaches_on_success_only() {
        let (delivery, mut queue) = delivery_channel();
        let dispatcher = Dispatcher::current(delivery);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let ok_log = Arc::clone(&seen);
        let err_log = Arc::clone(&seen);
        dispatcher.submit(
            async { Ok(41 + 1) },
            move |value: i32| ok_log.lock().unwrap().push(format!("ok {value}")),
            move |err| err_log.lock().unwrap().push(format!("err {err}")),
        );

        assert!(queue.deliver_next().await);
        assert_eq!(*seen.lock().unwrap(), vec!["ok 42".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_reaches_on_error_only() {
        let (delivery, mut queue) = delivery_channel();
        let dispatcher = Dispatcher::current(delivery);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let ok_log = Arc::clone(&seen);
        let err_log = Arc::clone(&seen);
        dispatcher.submit(
            async {
                Err::<i32, _>(Error::Config {
                    message: "store unreachable".to_string(),
                })
            },
            move |value| ok_log.lock().unwrap().push(format!("ok {value}")),
            move |err| err_log.lock().unwrap().push(format!("err {err}")),
        );

        assert!(queue.deliver_next().await);
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["err Configuration error: store unreachable".to_string()]
        );
    }

    #[tokio::test]
    async fn test_panicking_work_reaches_on_error() {
        let (delivery, mut queue) = delivery_channel();
        let dispatcher = Dispatcher::current(delivery);
        let seen = Arc::new(Mutex::new(None));

        let ok_slot = Arc::clone(&seen);
        let err_slot = Arc::clone(&seen);
        dispatcher.submit(
            async {
                let rows: Vec<i32> = Vec::new();
                Ok(rows[2])
            },
            move |value: i32| *ok_slot.lock().unwrap() = Some(Ok(value)),
            move |err| *err_slot.lock().unwrap() = Some(Err(err)),
        );

        let delivered = tokio::time::timeout(Duration::from_secs(2), queue.deliver_next())
            .await
            .unwrap();
        assert!(delivered);
        let outcome = seen.lock().unwrap().take().unwrap();
        assert!(matches!(outcome, Err(Error::Task(_))));
    }

    #[test]
    fn test_callbacks_run_on_the_draining_thread() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();
        let (delivery, mut queue) = delivery_channel();
        let dispatcher = Dispatcher::new(runtime.handle().clone(), delivery);

        let delivered_on = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&delivered_on);
        dispatcher.submit(
            async { Ok(()) },
            move |()| *slot.lock().unwrap() = Some(thread::current().id()),
            |_| {},
        );

        assert!(queue.blocking_deliver_next());
        assert_eq!(*delivered_on.lock().unwrap(), Some(thread::current().id()));
    }

    #[tokio::test]
    async fn test_run_stops_when_contexts_are_gone() {
        let (delivery, queue) = delivery_channel();
        let count = Arc::new(Mutex::new(0));
        for _ in 0..3 {
            let count = Arc::clone(&count);
            delivery.post(move || *count.lock().unwrap() += 1).unwrap();
        }
        drop(delivery);

        queue.run().await;
        assert_eq!(*count.lock().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_drain_ready_runs_queued_callbacks() {
        let (delivery, mut queue) = delivery_channel();
        delivery.post(|| {}).unwrap();
        delivery.post(|| {}).unwrap();
        assert_eq!(queue.drain_ready(), 2);
        assert_eq!(queue.drain_ready(), 0);
    }

    #[tokio::test]
    async fn test_post_after_queue_dropped_fails() {
        let (delivery, queue) = delivery_channel();
        drop(queue);
        assert!(matches!(delivery.post(|| {}), Err(Error::DeliveryClosed)));
    }
}
