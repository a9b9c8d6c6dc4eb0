//! File sink implementation
//!
//! Owns a process-exclusive log file, acquired with a bounded retry on
//! conflict and flushed to disk by a background timer. The file is truncated
//! at acquisition: each run starts a fresh log.

use crate::core::{LoggerError, Result};
use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use fs2::FileExt;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Interval between background flushes of the file buffer.
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_millis(1000);

/// Highest suffix index tried before acquisition gives up.
const MAX_ACQUIRE_ATTEMPTS: usize = 10;

#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: Arc<Mutex<BufWriter<File>>>,
    stop: Option<Sender<()>>,
    flusher: Option<thread::JoinHandle<()>>,
}

impl FileSink {
    /// Acquire `logs/<program>.log` with the default flush interval.
    pub fn acquire(program: &str) -> Result<Self> {
        Self::acquire_in(Path::new("logs"), program, DEFAULT_FLUSH_INTERVAL)
    }

    /// Acquire a log file under `dir`, creating the directory if absent.
    ///
    /// While another writer holds the candidate path, the suffix increments
    /// and acquisition retries: `<program>.log`, `<program>1.log`, up to
    /// `<program>10.log`. After that the attempt is abandoned with
    /// [`LoggerError::FileAcquisition`]; callers are expected to degrade to
    /// console-only output rather than fail.
    pub fn acquire_in(dir: &Path, program: &str, flush_interval: Duration) -> Result<Self> {
        std::fs::create_dir_all(dir)?;

        let mut attempt = 0;
        let (path, file) = loop {
            let path = dir.join(candidate_name(program, attempt));
            match open_exclusive(&path) {
                Ok(file) => break (path, file),
                Err(_) => {
                    attempt += 1;
                    if attempt > MAX_ACQUIRE_ATTEMPTS {
                        return Err(LoggerError::file_acquisition(
                            path.display().to_string(),
                            attempt,
                        ));
                    }
                }
            }
        };

        let writer = Arc::new(Mutex::new(BufWriter::new(file)));
        let (stop, ticks) = bounded::<()>(0);
        let flusher = {
            let writer = Arc::clone(&writer);
            thread::spawn(move || loop {
                // First flush fires immediately, then once per interval.
                let _ = writer.lock().flush();
                match ticks.recv_timeout(flush_interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })
        };

        Ok(Self {
            path,
            writer,
            stop: Some(stop),
            flusher: Some(flusher),
        })
    }

    /// Path of the acquired log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line plus a terminator, UTF-8. The guard is scoped to the
    /// call; the underlying handle stays open. Durability comes from the
    /// background timer or [`flush_now`](Self::flush_now).
    pub fn append(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flush buffered writes without waiting for the timer.
    pub fn flush_now(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Stop the timer before touching the writer so the final flush and
        // unlock cannot race a tick.
        drop(self.stop.take());
        if let Some(flusher) = self.flusher.take() {
            let _ = flusher.join();
        }

        let mut writer = self.writer.lock();
        let _ = writer.flush();
        let _ = FileExt::unlock(writer.get_ref());
    }
}

fn candidate_name(program: &str, attempt: usize) -> String {
    if attempt == 0 {
        format!("{program}.log")
    } else {
        format!("{program}{attempt}.log")
    }
}

/// Open `path` for exclusive write access: concurrent readers are fine, a
/// second writer fails immediately. Contents from a previous run are
/// discarded once the lock is held.
fn open_exclusive(path: &Path) -> std::io::Result<File> {
    let file = OpenOptions::new().write(true).create(true).open(path)?;
    file.try_lock_exclusive()?;
    file.set_len(0)?;
    Ok(file)
}
