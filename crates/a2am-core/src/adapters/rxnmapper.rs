use std::sync::Arc;

use a2amengine::{EngineError, RxnMapperEngine, RxnMapperOutput, RXNMAPPER};

use super::{absorb, AtomToAtomMapper};
use crate::batch::{chunk_sizes, progress_label, validate_batch_size};
use crate::{A2amError, DiagnosticSink, Library, MappingResult, ProgressReporter, QualitySignal, RxnMapperOptions};

/// RXNMapper. El lote se parte en bloques consecutivos de `batch_size` que se
/// envían al modelo como una sola llamada vectorizada, un bloque a la vez.
///
/// A diferencia de los otros adaptadores, un fallo dentro del lote (carga del
/// modelo o error de un bloque) hace fallar la llamada completa: el resultado
/// es `None` y se pierde el progreso parcial.
pub struct RxnMapperAdapter {
    engine: Arc<dyn RxnMapperEngine>,
    options: RxnMapperOptions,
    sink: Option<Arc<dyn DiagnosticSink>>,
    show_progress: bool,
}

impl RxnMapperAdapter {
    pub fn new(engine: Arc<dyn RxnMapperEngine>, options: RxnMapperOptions) -> Result<Self, A2amError> {
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

    /// `Err` sólo para `batch_size == 0`; `Ok(None)` si el lote falló entero.
    pub fn map_reaction_smiles_strings<S: AsRef<str>>(&self,
                                                      reaction_smiles_strings: &[S],
                                                      batch_size: usize)
                                                      -> Result<Option<Vec<MappingResult>>, A2amError> {
        validate_batch_size(batch_size)?;
        match self.map_in_batches(reaction_smiles_strings, batch_size) {
            Ok(results) => Ok(Some(results)),
            Err(error) => {
                if let Some(sink) = &self.sink {
                    sink.record(&format!("lote de {} reacciones", reaction_smiles_strings.len()), &error);
                }
                Ok(None)
            }
        }
    }

    fn map_in_batches<S: AsRef<str>>(&self, reactions: &[S], batch_size: usize) -> Result<Vec<MappingResult>, EngineError> {
        let model = self.engine.load_model()?;
        let params = self.options.attention_params();
        let plan = chunk_sizes(reactions.len(), batch_size);
        log::info!("Mapeando {} reacciones con {} en {} bloques de hasta {}",
                   reactions.len(),
                   RXNMAPPER,
                   plan.len(),
                   batch_size);
        let progress = ProgressReporter::new(progress_label(Library::RxnMapper, &format!("Batch Size: {batch_size} | GPU: ???")),
                                             plan.len(),
                                             self.show_progress);

        let mut results = Vec::with_capacity(reactions.len());
        for chunk in reactions.chunks(batch_size) {
            let rxns: Vec<&str> = chunk.iter().map(|reaction| reaction.as_ref()).collect();
            let outputs = model.get_attention_guided_atom_maps(&rxns, &params)?;
            if outputs.len() != rxns.len() {
                return Err(EngineError::output(RXNMAPPER,
                                               format!("se esperaban {} salidas y se recibieron {}",
                                                       rxns.len(),
                                                       outputs.len())));
            }
            results.extend(outputs.into_iter().map(to_mapping_result));
            progress.advance(1);
        }
        progress.finish();
        Ok(results)
    }

    fn try_map(&self, reaction_smiles: &str) -> Result<MappingResult, EngineError> {
        let model = self.engine.load_model()?;
        let outputs = model.get_attention_guided_atom_maps(&[reaction_smiles], &self.options.attention_params())?;
        outputs.into_iter()
               .next()
               .map(to_mapping_result)
               .ok_or_else(|| EngineError::output(RXNMAPPER, "lista de salidas vacía"))
    }
}

fn to_mapping_result(output: RxnMapperOutput) -> MappingResult {
    MappingResult::new(output.mapped_rxn, output.confidence.map(QualitySignal::Score))
}

impl AtomToAtomMapper for RxnMapperAdapter {
    fn library(&self) -> Library { Library::RxnMapper }

    fn map_reaction_smiles(&self, reaction_smiles: &str) -> MappingResult {
        absorb(self.sink.as_ref(), reaction_smiles, self.try_map(reaction_smiles))
    }
}
