use std::sync::Arc;

use a2amengine::{EngineError, EpamIndigoEngine};

use super::{absorb, AtomToAtomMapper};
use crate::{batch, A2amError, DiagnosticSink, EpamIndigoOptions, Library, MappingResult, QualitySignal};

/// EPAM Indigo. El lote se reparte entre `number_of_cpu_cores` trabajadores;
/// cada llamada crea su propia instancia de Indigo.
pub struct EpamIndigoAdapter {
    engine: Arc<dyn EpamIndigoEngine>,
    options: EpamIndigoOptions,
    sink: Option<Arc<dyn DiagnosticSink>>,
    show_progress: bool,
}

impl EpamIndigoAdapter {
    pub fn new(engine: Arc<dyn EpamIndigoEngine>, options: EpamIndigoOptions) -> Result<Self, A2amError> {
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

    pub fn map_reaction_smiles_strings<S>(&self,
                                          reaction_smiles_strings: &[S],
                                          number_of_cpu_cores: usize)
                                          -> Result<Vec<MappingResult>, A2amError>
        where S: AsRef<str> + Sync
    {
        batch::map_in_parallel(self, reaction_smiles_strings, number_of_cpu_cores, self.show_progress)
    }

    fn try_map(&self, reaction_smiles: &str) -> Result<MappingResult, EngineError> {
        let output = self.engine.automap(reaction_smiles, &self.options.automap_request())?;
        // sólo el código 1 indica que automap terminó sin errores
        let completed = output.status_code == 1;
        Ok(MappingResult::mapped(output.reaction_smiles, QualitySignal::CompletedWithoutErrors(completed)))
    }
}

impl AtomToAtomMapper for EpamIndigoAdapter {
    fn library(&self) -> Library { Library::EpamIndigo }

    fn map_reaction_smiles(&self, reaction_smiles: &str) -> MappingResult {
        absorb(self.sink.as_ref(), reaction_smiles, self.try_map(reaction_smiles))
    }
}
