//! Progress marker output.
//!
//! Markers are a terse trace of a run (`**** > --`), separate from the
//! `tracing` log. They go to a writer (stdout for the binary) and, optionally,
//! to a callback.

use std::io::{self, Write};

use parking_lot::Mutex;

use super::types::{Marker, MarkerCallback};

/// Destination for progress markers.
pub struct ProgressSink {
    /// Writer the rendered markers go to.
    writer: Mutex<Option<Box<dyn Write + Send>>>,
    /// Optional observer for each marker.
    callback: Option<MarkerCallback>,
}

impl ProgressSink {
    /// Write markers to `writer`.
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Some(Box::new(writer))),
            callback: None,
        }
    }

    /// Write markers to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Drop all markers.
    pub fn silent() -> Self {
        Self {
            writer: Mutex::new(None),
            callback: None,
        }
    }

    /// Also pass every marker to `callback`.
    pub fn with_callback(mut self, callback: MarkerCallback) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Emit one marker.
    ///
    /// Flushed immediately so the trace keeps pace with slow tools.
    pub fn mark(&self, marker: Marker) {
        if let Some(ref mut writer) = *self.writer.lock() {
            let written = writer
                .write_all(marker.as_str().as_bytes())
                .and_then(|()| writer.flush());
            if let Err(e) = written {
                tracing::debug!("Could not write progress marker {:?}: {}", marker, e);
            }
        }

        if let Some(ref callback) = self.callback {
            callback(marker);
        }
    }
}

impl Default for ProgressSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for ProgressSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressSink")
            .field("has_writer", &self.writer.lock().is_some())
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_rendered_markers() {
        let buffer = SharedBuffer::default();
        let sink = ProgressSink::new(buffer.clone());

        sink.mark(Marker::File);
        sink.mark(Marker::Concatenate);
        sink.mark(Marker::Remove);
        sink.mark(Marker::TaskEnd);

        let written = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert_eq!(written, "* > -\n");
    }

    #[test]
    fn calls_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        let sink = ProgressSink::silent().with_callback(Box::new(move |_marker| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        }));

        sink.mark(Marker::Step);
        sink.mark(Marker::Step);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn write_failure_still_reaches_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        let sink = ProgressSink::new(ClosedPipe).with_callback(Box::new(move |_marker| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        }));

        sink.mark(Marker::File);
        sink.mark(Marker::TaskEnd);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
