use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag telling the input thread and UI loop to stop.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("Shutdown requested");
        }
    }

    /// Set the flag on SIGTERM/SIGINT.
    pub fn register_signals(&self) -> std::io::Result<()> {
        signal_hook::flag::register(
            signal_hook::consts::SIGTERM,
            Arc::clone(&self.shutdown),
        )?;
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&self.shutdown))?;
        Ok(())
    }
}
