//! Main logger implementation

use super::{
    call_site::CallSite, formatter::format_message, metrics::LoggerMetrics, record::LogRecord,
    severity::SeverityLevel, sink::Sink,
};
use crate::sinks::LogFacadeSink;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};
use parking_lot::Mutex;
use std::sync::{Arc, OnceLock, Weak};
use std::thread;

/// The serialization domain: one sink behind one lock.
///
/// Every format+dispatch cycle, blocking or handed off, runs with this lock
/// held, so at most one submission is actively formatting/dispatching at any
/// instant.
struct Core {
    sink: Mutex<Box<dyn Sink>>,
    metrics: LoggerMetrics,
}

impl Core {
    /// Format a record and hand it to the sink, swallowing sink failures.
    ///
    /// A panicking sink is contained here: the lock is parking_lot's (no
    /// poisoning) and the unwind stops at this frame, so the domain stays
    /// usable and the dispatch worker stays alive.
    fn dispatch(&self, record: &LogRecord) {
        let mut sink = self.sink.lock();
        let formatted = format_message(&record.message, &record.site);

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            sink.accept(&formatted, record.level)
        }));

        match outcome {
            Ok(Ok(())) => {
                self.metrics.record_dispatched();
            }
            Ok(Err(e)) => {
                eprintln!("[LOG FUNNEL ERROR] sink '{}' failed: {}", sink.name(), e);
                self.metrics.record_dropped();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOG FUNNEL CRITICAL] sink '{}' panicked: {}. \
                     The logger remains usable.",
                    sink.name(),
                    panic_msg
                );
                self.metrics.record_dropped();
            }
        }
    }
}

/// Concurrency-safe logging facade over exactly one [`Sink`].
///
/// All submissions, from any thread, funnel through a single serialization
/// domain. [`submit`](Logger::submit) blocks the caller for one
/// format+dispatch cycle; [`log`](Logger::log) returns immediately and hands
/// the captured record to a dedicated dispatch worker.
///
/// Sequential awaited submissions reach the sink in call order. Concurrent
/// callers get mutual exclusion but no cross-caller ordering, and the
/// non-blocking path makes no ordering promise at all.
///
/// # Example
///
/// ```
/// use log_funnel::prelude::*;
/// use log_funnel::{call_site, info};
///
/// let logger = Logger::builder().build();
/// logger.submit("ready", SeverityLevel::Info, call_site!());
/// info!(logger, "listening on port {}", 8080);
/// ```
pub struct Logger {
    core: Arc<Core>,
    sender: Sender<LogRecord>,
}

impl Logger {
    /// Create a logger that owns the given sink for its lifetime.
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        Self::with_queue(Box::new(sink), None)
    }

    fn with_queue(sink: Box<dyn Sink>, queue_capacity: Option<usize>) -> Self {
        let core = Arc::new(Core {
            sink: Mutex::new(sink),
            metrics: LoggerMetrics::new(),
        });

        let (sender, receiver) = match queue_capacity {
            Some(capacity) => bounded(capacity),
            None => unbounded(),
        };

        Self::spawn_dispatch_worker(Arc::downgrade(&core), receiver);

        Self { core, sender }
    }

    /// The worker holds only a weak reference to the core. It re-upgrades
    /// per record and releases the upgrade before the next blocking receive,
    /// so neither an idle worker nor a queued record can keep a released
    /// logger's sink alive. Once the upgrade fails, remaining records are
    /// silently dropped.
    fn spawn_dispatch_worker(core: Weak<Core>, receiver: Receiver<LogRecord>) {
        thread::spawn(move || {
            while let Ok(record) = receiver.recv() {
                match core.upgrade() {
                    Some(core) => core.dispatch(&record),
                    None => break,
                }
            }
        });
    }

    /// Blocking submission: format and dispatch within the serialization
    /// domain, returning once the sink has seen the message.
    ///
    /// Never fails from the caller's perspective; sink errors are swallowed
    /// and counted in [`metrics`](Logger::metrics).
    pub fn submit(&self, message: impl Into<String>, level: SeverityLevel, site: CallSite) {
        let record = LogRecord::new(message.into(), level, site);
        self.core.dispatch(&record);
    }

    /// Non-blocking submission: capture the message, level, and call site
    /// now, dispatch at some later finite time on the worker thread.
    ///
    /// Returns immediately. With the default unbounded queue nothing is
    /// dropped while the logger lives; with a bounded queue a full buffer
    /// drops the record and counts it.
    pub fn log(&self, message: impl Into<String>, level: SeverityLevel, site: CallSite) {
        let record = LogRecord::new(message.into(), level, site);
        match self.sender.try_send(record) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => self.alert_and_drop(),
            Err(TrySendError::Disconnected(_)) => {
                // Worker already gone; nothing left to deliver to.
            }
        }
    }

    /// Non-blocking submission at the process default severity.
    pub fn log_default(&self, message: impl Into<String>, site: CallSite) {
        self.log(message, SeverityLevel::Default, site);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>, site: CallSite) {
        self.log(message, SeverityLevel::Debug, site);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>, site: CallSite) {
        self.log(message, SeverityLevel::Info, site);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>, site: CallSite) {
        self.log(message, SeverityLevel::Error, site);
    }

    #[inline]
    pub fn fault(&self, message: impl Into<String>, site: CallSite) {
        self.log(message, SeverityLevel::Fault, site);
    }

    fn alert_and_drop(&self) {
        self.core.metrics.record_queue_full();
        let dropped = self.core.metrics.record_dropped();

        // Alert on first drop and periodically thereafter
        if dropped == 0 || (dropped + 1).is_multiple_of(1000) {
            eprintln!(
                "[LOG FUNNEL WARNING] queue full, {} records dropped. \
                 Consider a larger queue capacity.",
                dropped + 1
            );
        }
    }

    /// Flush the owned sink.
    pub fn flush(&self) -> super::error::Result<()> {
        self.core.sink.lock().flush()
    }

    /// Health counters for this instance.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.core.metrics
    }

    /// Records that reached the sink.
    pub fn dispatched_count(&self) -> u64 {
        self.core.metrics.dispatched_count()
    }

    /// Records lost to sink failures or a full bounded queue.
    pub fn dropped_count(&self) -> u64 {
        self.core.metrics.dropped_count()
    }

    /// Times the bounded hand-off queue was found full.
    pub fn queue_full_count(&self) -> u64 {
        self.core.metrics.queue_full_events()
    }

    /// Process-wide shared instance, lazily constructed on first access and
    /// backed by [`LogFacadeSink`] with the default identity.
    pub fn shared() -> &'static Logger {
        static SHARED: OnceLock<Logger> = OnceLock::new();
        SHARED.get_or_init(|| Logger::new(LogFacadeSink::with_default_identity()))
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogFacadeSink::with_default_identity())
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use log_funnel::prelude::*;
///
/// let logger = Logger::builder()
///     .sink(LogFacadeSink::new("my_service", "ingest"))
///     .queue_capacity(1000)
///     .build();
/// ```
pub struct LoggerBuilder {
    sink: Option<Box<dyn Sink>>,
    queue_capacity: Option<usize>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            sink: None,
            queue_capacity: None,
        }
    }

    /// Set the sink. Defaults to [`LogFacadeSink`] with the default identity.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Bound the non-blocking hand-off queue.
    ///
    /// If not called, the queue is unbounded and the non-blocking path never
    /// drops while the logger lives. A bound trades that for a memory cap:
    /// records arriving at a full queue are dropped and counted.
    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(LogFacadeSink::with_default_identity()));
        Logger::with_queue(sink, self.queue_capacity)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
