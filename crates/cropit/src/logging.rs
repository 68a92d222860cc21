// Author: Dustin Pilgrim
// License: MIT

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

use eventline::runtime::{self, LogLevel};

use crate::error::{EditorError, Result};

/// Route editor logs to `log_path`, echoing to the console when `verbose`.
pub fn init_logging(log_path: &Path, verbose: bool) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| EditorError::Logging(format!("create log dir: {e}")))?;
    }

    // eventline's runtime init is async but resolves without waiting on
    // anything; a local block_on avoids pulling in an executor.
    block_on(runtime::init());

    runtime::enable_file_output(log_path)
        .map_err(|e| EditorError::Logging(format!("enable file output: {e}")))?;

    runtime::enable_console_output(verbose);
    runtime::enable_console_color(verbose);

    runtime::set_log_level(if verbose { LogLevel::Debug } else { LogLevel::Info });

    Ok(())
}

pub fn default_log_path() -> PathBuf {
    let base = std::env::var_os("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".local/state")))
        .unwrap_or_else(|| PathBuf::from("/tmp"));
    base.join("cropit").join("cropit.log")
}

// ---------------- minimal single-future executor ----------------

fn block_on<F: Future>(mut fut: F) -> F::Output {
    unsafe fn clone(_: *const ()) -> RawWaker {
        RawWaker::new(std::ptr::null(), &VTABLE)
    }
    unsafe fn wake(_: *const ()) {}
    unsafe fn wake_by_ref(_: *const ()) {}
    unsafe fn drop(_: *const ()) {}

    static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, wake, wake_by_ref, drop);

    let waker = unsafe { Waker::from_raw(RawWaker::new(std::ptr::null(), &VTABLE)) };
    let mut cx = Context::from_waker(&waker);

    // SAFETY: `fut` never leaves this stack frame once pinned.
    let mut fut = unsafe { Pin::new_unchecked(&mut fut) };

    loop {
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(v) => return v,
            Poll::Pending => std::thread::yield_now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_path_lands_under_the_app_directory() {
        assert!(default_log_path().ends_with("cropit/cropit.log"));
    }

    #[test]
    fn init_creates_the_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("logs").join("cropit.log");

        init_logging(&log_path, false).unwrap();
        assert!(dir.path().join("logs").exists());
    }
}
