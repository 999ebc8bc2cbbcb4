use std::sync::{Arc, Mutex, PoisonError};

/// Sink for the lines a demonstration prints
pub trait Console: Send + Sync {
    fn line(&self, text: &str);
}

/// Writes every line to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Console for Stdout {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}

/// In-memory console that records lines in write order
///
/// Clones share the same buffer, so a clone handed to a spawned task
/// records into the transcript the caller inspects.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Position of the first line equal to `text`
    pub fn position(&self, text: &str) -> Option<usize> {
        self.lines().iter().position(|line| line == text)
    }

    /// Whether any recorded line equals `text`
    pub fn contains(&self, text: &str) -> bool {
        self.position(text).is_some()
    }
}

impl Console for Transcript {
    fn line(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
    }
}

impl<C: Console + ?Sized> Console for Arc<C> {
    fn line(&self, text: &str) {
        (**self).line(text);
    }
}
