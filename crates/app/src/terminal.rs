//! Text surfaces drawing to a shared writer (stdout in the binary).
//!
//! The command loop plays the user through `submit` and `click_remove`, which
//! report the same [`UiEvent`]s a graphical page would.

use std::fmt::Display;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mailboard_view::{ChartSurface, FormSurface, ListSurface, SurfaceError, UiEvent, UiListener};

use crate::mentions::{barcode, MentionSeries};

/// Shared output sink.
pub type Output = Arc<Mutex<dyn Write + Send>>;

const BARCODE_WIDTH: usize = 48;

fn lock<T: ?Sized>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

fn fire<R: Clone>(listeners: &Mutex<Vec<UiListener<R>>>, event: UiEvent<R>) {
    let snapshot: Vec<UiListener<R>> = lock(listeners).clone();
    for listener in snapshot {
        listener(event.clone());
    }
}

fn write_line(out: &Output, text: std::fmt::Arguments<'_>) -> std::io::Result<()> {
    let mut w = lock(out);
    w.write_fmt(text)?;
    w.write_all(b"\n")?;
    w.flush()
}

fn emit(out: &Output, text: std::fmt::Arguments<'_>) -> Result<(), SurfaceError> {
    write_line(out, text).map_err(|err| {
        tracing::warn!(error = %err, "terminal write failed");
        SurfaceError::Detached
    })
}

/// Echo a list change. The entry is already tracked, so a failed write is only logged.
fn echo(out: &Output, text: std::fmt::Arguments<'_>) {
    if let Err(err) = write_line(out, text) {
        tracing::warn!(error = %err, "terminal echo failed");
    }
}

/// `add <record>` prompt standing in for an input field.
pub struct TerminalFormSurface<R> {
    out: Output,
    input: Mutex<Option<R>>,
    listeners: Mutex<Vec<UiListener<R>>>,
}

impl<R: Clone> TerminalFormSurface<R> {
    pub fn new(out: Output) -> Self {
        Self {
            out,
            input: Mutex::new(None),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Put `value` in the input and submit it.
    pub fn submit(&self, value: R) {
        *lock(&self.input) = Some(value.clone());
        fire(&self.listeners, UiEvent::Submitted(value));
    }

    pub fn input(&self) -> Option<R> {
        lock(&self.input).clone()
    }
}

impl<R: Clone + Send + Sync> FormSurface<R> for TerminalFormSurface<R> {
    fn mount(&self) -> Result<(), SurfaceError> {
        emit(&self.out, format_args!("== add a record: `add <record>`"))
    }

    fn clear_input(&self) {
        *lock(&self.input) = None;
    }

    fn listen(&self, listener: UiListener<R>) {
        lock(&self.listeners).push(listener);
    }
}

/// Printed list; keeps the displayed entries so removals can be echoed.
pub struct TerminalListSurface<R> {
    out: Output,
    entries: Mutex<Vec<R>>,
    listeners: Mutex<Vec<UiListener<R>>>,
}

impl<R: Clone> TerminalListSurface<R> {
    pub fn new(out: Output) -> Self {
        Self {
            out,
            entries: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Press the remove control next to `record`.
    pub fn click_remove(&self, record: &R) {
        fire(&self.listeners, UiEvent::RemoveRequested(record.clone()));
    }

    pub fn entries(&self) -> Vec<R> {
        lock(&self.entries).clone()
    }
}

impl<R: Clone + PartialEq + Display + Send + Sync> ListSurface<R> for TerminalListSurface<R> {
    fn mount(&self) -> Result<(), SurfaceError> {
        emit(&self.out, format_args!("== records (`remove <record>` to drop one)"))
    }

    fn clear_entries(&self) {
        lock(&self.entries).clear();
    }

    fn append_entry(&self, record: &R) {
        lock(&self.entries).push(record.clone());
        echo(&self.out, format_args!("  * {record}"));
    }

    fn prepend_entry(&self, record: &R) {
        lock(&self.entries).insert(0, record.clone());
        echo(&self.out, format_args!("  + {record}"));
    }

    fn remove_entry(&self, record: &R) -> bool {
        let removed = {
            let mut entries = lock(&self.entries);
            let index = entries.iter().position(|e| e == record);
            index.map(|i| entries.remove(i)).is_some()
        };
        if removed {
            echo(&self.out, format_args!("  - {record}"));
        }
        removed
    }

    fn listen(&self, listener: UiListener<R>) {
        lock(&self.listeners).push(listener);
    }
}

/// Chart printing the record count and, optionally, the mention barcodes.
pub struct TerminalChartSurface {
    out: Output,
    series: Vec<MentionSeries>,
}

impl TerminalChartSurface {
    pub fn new(out: Output, series: Vec<MentionSeries>) -> Self {
        Self { out, series }
    }
}

impl<R: Send + Sync> ChartSurface<R> for TerminalChartSurface {
    fn mount(&self) -> Result<(), SurfaceError> {
        emit(&self.out, format_args!("== chart"))
    }

    fn draw(&self, records: &[R]) -> Result<(), SurfaceError> {
        emit(&self.out, format_args!("  [chart] {} record(s)", records.len()))?;
        for s in &self.series {
            emit(
                &self.out,
                format_args!(
                    "  {:<5}|{}| {:>4} {:>5.1}/h",
                    s.symbol,
                    barcode(&s.mentions, BARCODE_WIDTH),
                    s.mentions.len(),
                    s.per_hour
                ),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    /// In-memory [`Output`] whose contents can be read back.
    #[derive(Clone, Default)]
    pub(crate) struct Captured(pub(crate) Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        pub(crate) fn output(&self) -> Output {
            Arc::new(Mutex::new(self.clone()))
        }

        pub(crate) fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn list_echoes_changes() {
        let captured = Captured::default();
        let list = TerminalListSurface::new(captured.output());

        list.mount().unwrap();
        list.append_entry(&"a".to_string());
        list.prepend_entry(&"b".to_string());
        assert!(list.remove_entry(&"a".to_string()));
        assert!(!list.remove_entry(&"zzz".to_string()));

        assert_eq!(list.entries(), vec!["b".to_string()]);
        let text = captured.text();
        assert!(text.contains("  * a\n"));
        assert!(text.contains("  + b\n"));
        assert!(text.contains("  - a\n"));
        assert!(!text.contains("zzz"));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn list_keeps_tracking_when_output_is_gone() {
        let out: Output = Arc::new(Mutex::new(Broken));
        let list: TerminalListSurface<String> = TerminalListSurface::new(out);

        assert_eq!(list.mount(), Err(SurfaceError::Detached));
        list.append_entry(&"a".to_string());
        list.prepend_entry(&"b".to_string());
        assert!(list.remove_entry(&"a".to_string()));

        assert_eq!(list.entries(), vec!["b".to_string()]);
    }

    #[test]
    fn form_reports_submissions_and_clears() {
        let captured = Captured::default();
        let form = TerminalFormSurface::new(captured.output());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        form.listen(Arc::new(move |ev: UiEvent<String>| sink.lock().unwrap().push(ev)));

        form.submit("x@x.com".to_string());
        assert_eq!(form.input(), Some("x@x.com".to_string()));
        form.clear_input();

        assert_eq!(form.input(), None);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![UiEvent::Submitted("x@x.com".to_string())]
        );
    }

    #[test]
    fn chart_prints_count_and_barcodes() {
        let captured = Captured::default();
        let t = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let chart = TerminalChartSurface::new(
            captured.output(),
            vec![MentionSeries {
                symbol: "AAPL",
                mentions: vec![t],
                per_hour: 34.3,
            }],
        );

        ChartSurface::<String>::draw(&chart, &["a".to_string(), "b".to_string()]).unwrap();

        let text = captured.text();
        assert!(text.contains("[chart] 2 record(s)"));
        assert!(text.contains("AAPL"));
        assert!(text.contains(" 34.3/h"));
    }
}
