//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::i18n::{Dictionary, Language, TranslationNode, TranslationTable};

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuf {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// What: Run `f` with a thread-local subscriber and return everything it logged.
///
/// Inputs:
/// - `f`: Code under test
///
/// Output:
/// - `f`'s result and the formatted log output (no ANSI, no timestamps)
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buf = SharedBuf::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let bytes = buf.0.lock().expect("log buffer poisoned").clone();
    (result, String::from_utf8_lossy(&bytes).into_owned())
}

/// Leaf node helper.
fn text(s: &str) -> TranslationNode {
    TranslationNode::Text(s.to_string())
}

/// What: Provide a small two-language dictionary.
///
/// Output:
/// - `en`: `aboutTitle.{our,introduction}`, `contact`, `send`, `copyright`
/// - `hi`: the same minus `send`
pub fn sample_dictionary() -> Dictionary {
    let table = |entries: Vec<(&str, TranslationNode)>| -> TranslationTable {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    };
    let en = table(vec![
        (
            "aboutTitle",
            TranslationNode::Table(table(vec![
                ("our", text("Our")),
                ("introduction", text("Introduction")),
            ])),
        ),
        ("contact", text("Contact")),
        ("send", text("Send")),
        ("copyright", text("© {year} TATSAM")),
    ]);
    let hi = table(vec![
        (
            "aboutTitle",
            TranslationNode::Table(table(vec![
                ("our", text("हमारा")),
                ("introduction", text("परिचय")),
            ])),
        ),
        ("contact", text("संपर्क")),
        ("copyright", text("© {year} तत्सम्")),
    ]);
    Dictionary::from_tables([(Language::En, en), (Language::Hi, hi)])
}
