//! Adaptadores de motor con el contrato uniforme de un solo elemento.
//!
//! Todo `EngineError` se absorbe aquí: si hay un [`DiagnosticSink`] se
//! registra, y el resultado es [`MappingResult::failed`]. Una reacción mal
//! formada nunca aborta un lote.
use std::sync::Arc;

use a2amengine::EngineError;

use crate::{DiagnosticSink, Library, MappingResult};

pub mod chytorch;
pub mod indigo;
pub mod rxnmapper;

pub use chytorch::ChytorchRxnMapAdapter;
pub use indigo::EpamIndigoAdapter;
pub use rxnmapper::RxnMapperAdapter;

pub trait AtomToAtomMapper: Sync {
    fn library(&self) -> Library;

    /// Mapea una reacción. Nunca falla: los errores del motor dan `(ausente, ausente)`.
    fn map_reaction_smiles(&self, reaction_smiles: &str) -> MappingResult;
}

/// Convierte el resultado del motor en el contrato fail-soft.
pub(crate) fn absorb(sink: Option<&Arc<dyn DiagnosticSink>>,
                     reaction_smiles: &str,
                     outcome: Result<MappingResult, EngineError>)
                     -> MappingResult {
    match outcome {
        Ok(result) => result,
        Err(error) => {
            if let Some(sink) = sink {
                sink.record(reaction_smiles, &error);
            }
            MappingResult::failed()
        }
    }
}
