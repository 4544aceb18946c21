//! Destino opcional de diagnóstico para los fallos absorbidos por los adaptadores.
use a2amengine::EngineError;

pub trait DiagnosticSink: Send + Sync {
    /// `context` es la reacción que falló o una descripción del lote.
    fn record(&self, context: &str, error: &EngineError);
}

/// Registra los fallos a través de `log`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, context: &str, error: &EngineError) {
        log::error!(target: "a2am", "{error} [{context}]");
    }
}
