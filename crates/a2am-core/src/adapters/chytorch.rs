use std::sync::Arc;

use a2amengine::{ChytorchRxnMapEngine, EngineError};

use super::{absorb, AtomToAtomMapper};
use crate::{batch, A2amError, ChytorchRxnMapOptions, DiagnosticSink, Library, MappingResult, QualitySignal};

/// Chytorch RxnMap. Sin paralelismo: el lote se procesa siempre con un solo
/// trabajador.
pub struct ChytorchRxnMapAdapter {
    engine: Arc<dyn ChytorchRxnMapEngine>,
    options: ChytorchRxnMapOptions,
    sink: Option<Arc<dyn DiagnosticSink>>,
    show_progress: bool,
}

impl ChytorchRxnMapAdapter {
    pub fn new(engine: Arc<dyn ChytorchRxnMapEngine>, options: ChytorchRxnMapOptions) -> Result<Self, A2amError> {
        options.validate()?;
        Ok(Self { engine, options, sink: None, show_progress: true })
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Mapea el lote de forma secuencial.
    pub fn map_reaction_smiles_strings<S: AsRef<str>>(&self, reaction_smiles_strings: &[S]) -> Vec<MappingResult> {
        batch::map_sequentially(self, reaction_smiles_strings, self.show_progress)
    }

    fn try_map(&self, reaction_smiles: &str) -> Result<MappingResult, EngineError> {
        let output = self.engine
                         .map_reaction(reaction_smiles, &self.options.smiles_flags(), &self.options.reset_mapping_params())?;
        Ok(MappingResult::mapped(output.mapped_reaction_smiles, QualitySignal::Score(output.score)))
    }
}

impl AtomToAtomMapper for ChytorchRxnMapAdapter {
    fn library(&self) -> Library { Library::ChytorchRxnMap }

    fn map_reaction_smiles(&self, reaction_smiles: &str) -> MappingResult {
        absorb(self.sink.as_ref(), reaction_smiles, self.try_map(reaction_smiles))
    }
}
