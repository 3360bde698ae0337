//! Narration collaborator: speak a string in the background, cancelable
//!
//! `speak` returns immediately with an `Utterance` handle. Dropping the handle
//! leaves the narration running; `cancel` stops it before the next word.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::warn;

/// Something that can read text aloud
pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str) -> Utterance;
}

/// Handle to a narration in progress
#[derive(Debug)]
pub struct Utterance {
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Utterance {
    /// An utterance that has nothing left to say
    pub fn finished() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Stop at the next word boundary
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(handle) = &self.handle {
            handle.thread().unpark();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |handle| handle.is_finished())
    }

    /// Block until the narration ends or is cancelled
    pub fn wait(mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Narration thread panicked");
            }
        }
    }
}

type SharedSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Writes words to a sink at a reading pace
pub struct PacedSpeaker {
    sink: SharedSink,
    word_delay: Duration,
}

impl PacedSpeaker {
    /// Narrate to any writer. A pace of 0 writes without pausing.
    pub fn with_sink<W: Write + Send + 'static>(sink: W, words_per_minute: u32) -> Self {
        let word_delay = if words_per_minute == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(60_000 / words_per_minute as u64)
        };

        Self {
            sink: Arc::new(Mutex::new(Box::new(sink))),
            word_delay,
        }
    }
}

impl Speaker for PacedSpeaker {
    fn speak(&self, text: &str) -> Utterance {
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return Utterance::finished();
        }

        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let sink = Arc::clone(&self.sink);
        let delay = self.word_delay;

        let handle = thread::spawn(move || {
            let last = words.len() - 1;
            for (i, word) in words.iter().enumerate() {
                if flag.load(Ordering::SeqCst) {
                    break;
                }

                let separator = if i == last { "\n" } else { " " };
                let written = match sink.lock() {
                    Ok(mut out) => write!(out, "{}{}", word, separator).and_then(|_| out.flush()),
                    Err(_) => Err(io::Error::new(io::ErrorKind::Other, "narration sink poisoned")),
                };
                if let Err(e) = written {
                    warn!("Narration stopped: {}", e);
                    break;
                }

                pause(delay, &flag);
            }
        });

        Utterance {
            cancelled,
            handle: Some(handle),
        }
    }
}

/// Sleep for `delay`, waking early when cancelled
fn pause(delay: Duration, cancelled: &AtomicBool) {
    let deadline = Instant::now() + delay;
    loop {
        if cancelled.load(Ordering::SeqCst) {
            return;
        }
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        thread::park_timeout(deadline - now);
    }
}

/// Speaker for when narration is turned off
#[derive(Debug, Default, Clone, Copy)]
pub struct MutedSpeaker;

impl Speaker for MutedSpeaker {
    fn speak(&self, _text: &str) -> Utterance {
        Utterance::finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_speaks_every_word() {
        let buffer = SharedBuffer::default();
        let speaker = PacedSpeaker::with_sink(buffer.clone(), 0);

        speaker.speak("  It would take   about 27.3 years. ").wait();
        assert_eq!(buffer.contents(), "It would take about 27.3 years.\n");
    }

    #[test]
    fn test_cancel_stops_narration() {
        let buffer = SharedBuffer::default();
        // One word per second: cancellation lands long before the end
        let speaker = PacedSpeaker::with_sink(buffer.clone(), 60);

        let started = Instant::now();
        let utterance = speaker.speak("one two three four five six");
        utterance.cancel();
        assert!(utterance.is_cancelled());
        utterance.wait();

        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(!buffer.contents().contains("six"));
    }

    #[test]
    fn test_empty_text_finishes_immediately() {
        let speaker = PacedSpeaker::with_sink(SharedBuffer::default(), 0);
        assert!(speaker.speak("   ").is_finished());
    }

    #[test]
    fn test_muted_speaker() {
        let utterance = MutedSpeaker.speak("anything");
        assert!(utterance.is_finished());
        utterance.cancel();
        utterance.wait();
    }
}
