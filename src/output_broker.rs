use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};
use tokio::sync::mpsc;

/// Central output broker that funnels every log line through one background
/// task, so interleaved cycle output stays readable and verbosity filtering
/// lives in one place.
#[derive(Clone)]
pub struct OutputBroker {
    sender: mpsc::UnboundedSender<OutputRequest>,
}

pub struct OutputRequest {
    pub level: OutputLevel,
    pub message: String,
}

/// Output levels for filtering.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum OutputLevel {
    Error,   // Always shown
    Warn,    // Always shown - shortage/backoff conditions
    Success, // Level 0+ - completed game actions
    Info,    // Level 1+ - cycle progress
    Debug,   // Level 2+ - request-level detail
}

static VERBOSITY_LEVEL: AtomicU8 = AtomicU8::new(1);

pub fn set_verbosity_level(level: u8) {
    VERBOSITY_LEVEL.store(level, Ordering::Relaxed);
}

pub fn get_verbosity_level() -> u8 {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

impl OutputBroker {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(Self::broker_worker(receiver));
        Self { sender }
    }

    /// Queue a log line - never blocks, drops silently if the broker is down.
    pub fn output(&self, level: OutputLevel, message: String) {
        let _ = self.sender.send(OutputRequest { level, message });
    }

    async fn broker_worker(mut receiver: mpsc::UnboundedReceiver<OutputRequest>) {
        while let Some(request) = receiver.recv().await {
            let verbosity = get_verbosity_level();
            let should_show = match request.level {
                OutputLevel::Error | OutputLevel::Warn => true,
                OutputLevel::Success => true,
                OutputLevel::Info => verbosity >= 1,
                OutputLevel::Debug => verbosity >= 2,
            };

            if should_show {
                let timestamp = chrono::Utc::now().format("%H:%M:%S");
                println!("[{}] {}", timestamp, request.message);
            }
        }
    }
}

impl Default for OutputBroker {
    fn default() -> Self {
        Self::new()
    }
}

/// Global output broker instance
static GLOBAL_BROKER: OnceLock<OutputBroker> = OnceLock::new();

pub fn get_output_broker() -> &'static OutputBroker {
    GLOBAL_BROKER.get_or_init(OutputBroker::new)
}

/// Global output macros that work anywhere
#[macro_export]
macro_rules! o_error {
    ($($arg:tt)*) => {{
        let broker = $crate::output_broker::get_output_broker();
        broker.output($crate::output_broker::OutputLevel::Error, format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! o_warn {
    ($($arg:tt)*) => {{
        let broker = $crate::output_broker::get_output_broker();
        broker.output($crate::output_broker::OutputLevel::Warn, format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! o_success {
    ($($arg:tt)*) => {{
        let broker = $crate::output_broker::get_output_broker();
        broker.output($crate::output_broker::OutputLevel::Success, format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! o_info {
    ($($arg:tt)*) => {{
        let broker = $crate::output_broker::get_output_broker();
        broker.output($crate::output_broker::OutputLevel::Info, format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! o_debug {
    ($($arg:tt)*) => {{
        let broker = $crate::output_broker::get_output_broker();
        broker.output($crate::output_broker::OutputLevel::Debug, format!($($arg)*));
    }};
}
