//! Page wiring: one bus, one store, the terminal surfaces and one coordinator.

use std::io::{BufRead, ErrorKind};
use std::sync::Arc;

use mailboard_controller::Coordinator;
use mailboard_core::Renderer;
use mailboard_events::{EventBus, InMemoryEventBus};
use mailboard_model::Store;
use mailboard_view::{ChartRenderer, CompositeRenderer, FormRenderer, ListRenderer};

use crate::command::{Command, HELP};
use crate::mentions::MentionSeries;
use crate::terminal::{Output, TerminalChartSurface, TerminalFormSurface, TerminalListSurface};

pub struct Page {
    store: Arc<Store<String>>,
    form: Arc<TerminalFormSurface<String>>,
    list: Arc<TerminalListSurface<String>>,
    coordinator: Coordinator<String>,
    out: Output,
}

impl Page {
    pub fn new(seed: Vec<String>, series: Vec<MentionSeries>, out: Output) -> Self {
        let bus: Arc<dyn EventBus<String>> = Arc::new(InMemoryEventBus::new());
        let store = Arc::new(Store::with_records(bus.clone(), seed));

        let form = Arc::new(TerminalFormSurface::new(out.clone()));
        let list = Arc::new(TerminalListSurface::new(out.clone()));
        let chart = Arc::new(TerminalChartSurface::new(out.clone(), series));

        let children: Vec<Arc<dyn Renderer<String>>> = vec![
            Arc::new(FormRenderer::new(form.clone(), bus.clone())),
            Arc::new(ListRenderer::new(list.clone(), bus.clone())),
            Arc::new(ChartRenderer::new(chart, bus.clone())),
        ];
        let view = Arc::new(CompositeRenderer::new(children));
        let coordinator = Coordinator::new(store.clone(), view, bus);

        Self {
            store,
            form,
            list,
            coordinator,
            out,
        }
    }

    /// First draw plus event binding.
    pub fn start(&self) {
        self.coordinator.initialize();
    }

    /// Run one command. Returns `false` once the user asked to quit.
    pub fn execute(&self, command: Command) -> bool {
        match command {
            Command::Add(record) => self.form.submit(record),
            Command::Remove(record) => self.list.click_remove(&record),
            Command::List => {
                let records = self.store.get_all();
                self.print(&format!("{} record(s)", records.len()));
                for record in records {
                    self.print(&format!("  {record}"));
                }
            }
            Command::Help => self.print(HELP),
            Command::Quit => return false,
        }
        true
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// A line that is not valid UTF-8 is reported and skipped; any other read
    /// error ends the session.
    pub fn run(&self, input: impl BufRead) -> std::io::Result<()> {
        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) if err.kind() == ErrorKind::InvalidData => {
                    tracing::warn!(error = %err, "skipping input line that is not UTF-8");
                    self.print("input must be UTF-8 text");
                    continue;
                }
                Err(err) => return Err(err),
            };
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if !self.execute(command) {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => self.print(&err.to_string()),
            }
        }
        Ok(())
    }

    pub fn print(&self, text: &str) {
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "terminal write failed");
        }
    }

    pub fn records(&self) -> Vec<String> {
        self.store.get_all()
    }

    pub fn displayed(&self) -> Vec<String> {
        self.list.entries()
    }
}
