// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt,
          io::{self, Write},
          sync::{Arc, MutexGuard, PoisonError}};

pub type StdMutex<T> = std::sync::Mutex<T>;
pub type SendRawTerminal = dyn Write + Send;
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;
pub type LockedOutputDevice<'a> = &'a mut dyn Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! Use it in a separate block
/// scope.
///
/// ```
/// use fancy_console::{LockedOutputDevice, OutputDevice, lock_output_device_as_mut};
///
/// let device = OutputDevice::new_stdout();
/// {
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"Hello, world!\n");
/// } // The lock is released here.
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// Where a [`crate::Console`] (and optionally the log layer) writes to.
/// - It is safe to clone, every clone shares the same sink.
/// - Tests swap in a mock with [`crate::test_fixtures::OutputDeviceExt::new_mock`].
#[derive(Clone)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl fmt::Debug for OutputDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputDevice")
            .field("is_mock", &self.is_mock)
            .finish_non_exhaustive()
    }
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(io::stdout())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(io::stderr())),
            is_mock: false,
        }
    }

    /// Locks the output device for writing. A poisoned lock is recovered, since the
    /// sink holds no invariants that a panicking writer could have broken.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write all of `bytes` and flush, holding the lock for both.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying sink.
    pub fn write_and_flush(&self, bytes: &[u8]) -> io::Result<()> {
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(self);
        mut_ref.write_all(bytes)?;
        mut_ref.flush()
    }
}

/// Lets the device back a `tracing_subscriber` writer (via `Mutex<OutputDevice>` or a
/// clone per event).
impl Write for OutputDevice {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> { self.lock().write(buf) }

    fn flush(&mut self) -> io::Result<()> { self.lock().flush() }
}
