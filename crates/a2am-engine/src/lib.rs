//! a2amengine: puente hacia los motores externos de mapeo átomo-a-átomo.
//!
//! Cada motor (Chytorch RxnMap, EPAM Indigo, RXNMapper) se expone detrás de un
//! trait propio en [`engine`]. Con la feature `python` (por defecto) se
//! compilan las implementaciones que llaman a las librerías Python a través
//! del intérprete embebido.
use thiserror::Error;

pub mod engine;
#[cfg(feature = "python")]
pub mod core;
#[cfg(feature = "python")]
pub mod chytorch;
#[cfg(feature = "python")]
pub mod indigo;
#[cfg(feature = "python")]
pub mod rxnmapper;

pub use engine::{AttentionGuidedParams, ChythonSmilesFlags, ChytorchRxnMapEngine, ChytorchRxnMapOutput,
                 EpamIndigoEngine, IndigoAutomapOutput, IndigoAutomapRequest, ResetMappingParams,
                 RxnMapperEngine, RxnMapperModel, RxnMapperOutput};
#[cfg(feature = "python")]
pub use chytorch::PyChytorchRxnMap;
#[cfg(feature = "python")]
pub use indigo::PyEpamIndigo;
#[cfg(feature = "python")]
pub use rxnmapper::PyRxnMapper;

/// Nombres legibles de los motores, usados en errores y etiquetas de progreso.
pub const CHYTORCH_RXNMAP: &str = "Chytorch RxnMap";
pub const EPAM_INDIGO: &str = "EPAM Indigo";
pub const RXNMAPPER: &str = "RXNMapper";

/// Errores producidos por un motor externo.
///
/// Las excepciones de Python se convierten a texto mientras el intérprete
/// sigue adjunto, así el error es `Send + Sync` y no depende de pyo3.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Error inicializando {engine}: {message}")]
    Init { engine: &'static str, message: String },
    #[error("Error de mapeo en {engine}: {message}")]
    Mapping { engine: &'static str, message: String },
    #[error("Salida inesperada de {engine}: {message}")]
    Output { engine: &'static str, message: String },
}

impl EngineError {
    pub fn init(engine: &'static str, message: impl Into<String>) -> Self {
        EngineError::Init { engine, message: message.into() }
    }
    pub fn mapping(engine: &'static str, message: impl Into<String>) -> Self {
        EngineError::Mapping { engine, message: message.into() }
    }
    pub fn output(engine: &'static str, message: impl Into<String>) -> Self {
        EngineError::Output { engine, message: message.into() }
    }

    /// Nombre del motor que originó el error.
    pub fn engine(&self) -> &'static str {
        match self {
            EngineError::Init { engine, .. } | EngineError::Mapping { engine, .. } | EngineError::Output { engine, .. } => engine,
        }
    }
}
