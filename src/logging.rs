//! Debug-build diagnostics on stderr, timed from the first log call.

use std::sync::OnceLock;
use std::thread;
use std::time::{Duration, Instant};

static STARTED: OnceLock<Instant> = OnceLock::new();

/// `[+<ms>ms][<thread>] <message>`; a tag such as `[QUEUE]` stays in the message.
fn format_line(elapsed: Duration, thread_name: &str, message: &str) -> String {
    format!("[+{}ms][{thread_name}] {message}", elapsed.as_millis())
}

pub fn dev_log(message: &str) {
    if !cfg!(debug_assertions) {
        return;
    }

    let elapsed = STARTED.get_or_init(Instant::now).elapsed();
    let current = thread::current();
    eprintln!(
        "{}",
        format_line(elapsed, current.name().unwrap_or("unnamed"), message)
    );
}

#[macro_export]
macro_rules! log_dev {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::logging::dev_log(&format!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_elapsed_thread_and_tag() {
        let line = format_line(Duration::from_millis(1_250), "main", "[UNDO] restored 'A'");
        assert_eq!(line, "[+1250ms][main] [UNDO] restored 'A'");
    }
}
