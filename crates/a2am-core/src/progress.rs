//! Indicador de progreso `hechos/total` para los drivers por lotes.
//!
//! Sólo es observabilidad: escribe una barra ASCII en stderr (si está
//! visible) y refleja el avance en `log::debug!`.
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Ancho total de la línea de progreso.
pub const PROGRESS_COLUMNS: usize = 150;

const MIN_BAR_WIDTH: usize = 10;

#[derive(Debug)]
pub struct ProgressReporter {
    label: String,
    total: usize,
    done: AtomicUsize,
    visible: bool,
}

impl ProgressReporter {
    pub fn new(label: impl Into<String>, total: usize, visible: bool) -> Self {
        let reporter = Self { label: label.into(), total, done: AtomicUsize::new(0), visible };
        log::debug!("{}: 0/{}", reporter.label, reporter.total);
        reporter.draw(0);
        reporter
    }

    pub fn hidden(label: impl Into<String>, total: usize) -> Self { Self::new(label, total, false) }

    pub fn label(&self) -> &str { &self.label }

    pub fn total(&self) -> usize { self.total }

    pub fn position(&self) -> usize { self.done.load(Ordering::SeqCst) }

    /// Avanza `n` elementos; seguro desde varios hilos.
    pub fn advance(&self, n: usize) -> usize {
        let done = self.done.fetch_add(n, Ordering::SeqCst) + n;
        self.draw(done);
        done
    }

    pub fn finish(&self) {
        let done = self.position();
        log::debug!("{}: {}/{}", self.label, done, self.total);
        if self.visible {
            let mut err = std::io::stderr().lock();
            let _ = writeln!(err);
        }
    }

    /// Línea de progreso ajustada a [`PROGRESS_COLUMNS`].
    pub fn render_line(&self, done: usize) -> String {
        let done = done.min(self.total);
        let percent = if self.total == 0 { 100 } else { done * 100 / self.total };
        let counter = format!(" {done}/{total}", total = self.total);
        let head = format!("{}: {percent:>3}%|", self.label);
        let bar_width = PROGRESS_COLUMNS.saturating_sub(head.chars().count() + counter.chars().count() + 1)
                                        .max(MIN_BAR_WIDTH);
        let filled = if self.total == 0 { bar_width } else { bar_width * done / self.total };
        format!("{head}{}{}|{counter}", "#".repeat(filled), " ".repeat(bar_width - filled))
    }

    fn draw(&self, done: usize) {
        if !self.visible {
            return;
        }
        let line = self.render_line(done);
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\r{line}");
        let _ = err.flush();
    }
}
