#![cfg(feature = "tracing")]

use std::{
    io,
    sync::{Arc, Mutex, PoisonError},
};

use nondet::{
    consume, either, emit,
    trace::traced,
    Parser, ParserExt, ResultSet,
};


/// Collects everything the subscriber writes.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capturing<R>(f: impl FnOnce() -> R) -> (R, String) {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture.text())
}


#[test]
fn same_results() {
    let a = || consume(|c: &char| *c == 'a');
    let plain = either(a().map(|_| 1), emit(0));
    let wrapped = traced("maybe_a", either(a().map(|_| 1), emit(0)));

    for tokens in [&['a'][..], &['b'][..], &[][..]] {
        assert_eq!(wrapped.parse(tokens, 0), plain.parse(tokens, 0));
    }
}

#[test]
fn events_per_invocation() {
    let a = traced("a", consume(|c: &char| *c == 'a'));
    let both = traced("both", a.by_ref().then(a.by_ref()));

    let (results, log) = capturing(|| both.parse(&['a', 'a', 'b'], 0));
    assert_eq!(results, ResultSet::singleton(('a', 'a'), 2));

    let lines: Vec<&str> = log.lines().filter(|line| line.contains("parsed")).collect();
    // The inner parser twice, then the outer once.
    assert_eq!(lines.len(), 3, "{log}");
    assert!(lines[0].contains("\"a\"") && lines[0].contains("position=0"), "{log}");
    assert!(lines[1].contains("\"a\"") && lines[1].contains("position=1"), "{log}");
    assert!(lines[2].contains("\"both\"") && lines[2].contains("results=1"), "{log}");
}

#[test]
fn silent_without_wrapper() {
    let a = consume(|c: &char| *c == 'a');
    let (results, log) = capturing(|| a.parse(&['a'], 0));
    assert_eq!(results, ResultSet::singleton('a', 1));
    assert!(log.is_empty(), "{log}");
}
