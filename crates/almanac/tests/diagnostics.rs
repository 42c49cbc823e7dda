use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use almanac::{Language, LenientDate};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records WARN events, returning the log text.
fn capture_warnings<F: FnOnce()>(f: F) -> String {
    let sink = Capture::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = sink.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn diagnostics_for_invalid_and_undefined_dates() {
    let log = capture_warnings(|| {
        let _ = LenientDate::new(2023, 2, 30);
    });
    assert!(log.contains("WARN"), "log: {log}");
    assert!(log.contains("almanac::diagnostic"), "log: {log}");
    assert!(log.contains("setDate: Illegal date: YYYY:MM:DD (2023:2:30)"), "log: {log}");

    let log = capture_warnings(|| {
        let _ = LenientDate::parse("2023/02/01");
    });
    assert!(log.contains("setDate: Malformed date: '2023/02/01'"), "log: {log}");

    let log = capture_warnings(|| {
        let mut date = LenientDate::undefined();
        date.add_days(1);
        let _ = date.iso_date();
        let _ = date.week_number();
        let _ = date.weekday_name(&Language::English);
    });
    for operation in ["addDays:", "isoDate:", "weekNo:", "weekday:"] {
        assert!(log.contains(operation), "missing {operation} in log: {log}");
    }
}

#[test]
fn defined_dates_stay_quiet() {
    let log = capture_warnings(|| {
        let mut date = LenientDate::new(2024, 1, 1);
        date.add_days(30);
        let _ = date.format("%A %D", &Language::German);
        let _ = date.easter_sunday();
    });
    assert!(log.is_empty(), "unexpected log: {log}");
}
