//! Fachada de despacho: elige el adaptador por [`Library`] y delega en él o
//! en su driver por lotes.
use std::sync::Arc;

use a2amengine::{ChytorchRxnMapEngine, EpamIndigoEngine, RxnMapperEngine};

use crate::adapters::AtomToAtomMapper;
use crate::batch::{validate_batch_size, validate_number_of_cpu_cores};
use crate::{A2amConfig, A2amError, ChytorchRxnMapAdapter, ChytorchRxnMapOptions, DiagnosticSink, EpamIndigoAdapter,
            EpamIndigoOptions, Library, MappingResult, RxnMapperAdapter, RxnMapperOptions};

/// Motores que respaldan a cada adaptador.
#[derive(Clone)]
pub struct MappingEngines {
    pub chytorch_rxnmap: Arc<dyn ChytorchRxnMapEngine>,
    pub epam_indigo: Arc<dyn EpamIndigoEngine>,
    pub rxnmapper: Arc<dyn RxnMapperEngine>,
}

#[cfg(feature = "python")]
impl MappingEngines {
    /// Motores respaldados por las librerías Python.
    pub fn python() -> Self {
        Self { chytorch_rxnmap: Arc::new(a2amengine::PyChytorchRxnMap),
               epam_indigo: Arc::new(a2amengine::PyEpamIndigo),
               rxnmapper: Arc::new(a2amengine::PyRxnMapper) }
    }
}

/// Opciones de los tres motores y parámetros de concurrencia.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingSettings {
    pub chytorch_rxnmap: ChytorchRxnMapOptions,
    pub epam_indigo: EpamIndigoOptions,
    pub rxnmapper: RxnMapperOptions,
    pub number_of_cpu_cores: usize,
    pub batch_size: usize,
    pub show_progress: bool,
}

impl Default for MappingSettings {
    fn default() -> Self { Self::from_config(&A2amConfig::default()) }
}

impl MappingSettings {
    pub fn from_config(config: &A2amConfig) -> Self {
        Self { chytorch_rxnmap: ChytorchRxnMapOptions::default(),
               epam_indigo: EpamIndigoOptions { timeout_period_ms: config.aam_timeout_ms, ..Default::default() },
               rxnmapper: RxnMapperOptions::default(),
               number_of_cpu_cores: config.number_of_cpu_cores,
               batch_size: config.batch_size,
               show_progress: config.show_progress }
    }
}

pub struct AtomToAtomMapping {
    chytorch_rxnmap: ChytorchRxnMapAdapter,
    epam_indigo: EpamIndigoAdapter,
    rxnmapper: RxnMapperAdapter,
    number_of_cpu_cores: usize,
    batch_size: usize,
}

impl AtomToAtomMapping {
    /// Construye los tres adaptadores; cualquier opción inválida falla aquí.
    pub fn new(settings: MappingSettings, engines: MappingEngines) -> Result<Self, A2amError> {
        validate_number_of_cpu_cores(settings.number_of_cpu_cores)?;
        validate_batch_size(settings.batch_size)?;
        let chytorch_rxnmap = ChytorchRxnMapAdapter::new(engines.chytorch_rxnmap, settings.chytorch_rxnmap)?
            .with_progress(settings.show_progress);
        let epam_indigo =
            EpamIndigoAdapter::new(engines.epam_indigo, settings.epam_indigo)?.with_progress(settings.show_progress);
        let rxnmapper =
            RxnMapperAdapter::new(engines.rxnmapper, settings.rxnmapper)?.with_progress(settings.show_progress);
        Ok(Self { chytorch_rxnmap,
                  epam_indigo,
                  rxnmapper,
                  number_of_cpu_cores: settings.number_of_cpu_cores,
                  batch_size: settings.batch_size })
    }

    #[cfg(feature = "python")]
    pub fn with_python_engines(settings: MappingSettings) -> Result<Self, A2amError> {
        Self::new(settings, MappingEngines::python())
    }

    /// Registra los fallos absorbidos de los tres adaptadores en `sink`.
    pub fn with_sink(self, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { chytorch_rxnmap: self.chytorch_rxnmap.with_sink(Arc::clone(&sink)),
               epam_indigo: self.epam_indigo.with_sink(Arc::clone(&sink)),
               rxnmapper: self.rxnmapper.with_sink(sink),
               ..self }
    }

    pub fn mapper(&self, library: Library) -> &dyn AtomToAtomMapper {
        match library {
            Library::ChytorchRxnMap => &self.chytorch_rxnmap,
            Library::EpamIndigo => &self.epam_indigo,
            Library::RxnMapper => &self.rxnmapper,
        }
    }

    pub fn map_reaction_smiles(&self, library: Library, reaction_smiles: &str) -> MappingResult {
        self.mapper(library).map_reaction_smiles(reaction_smiles)
    }

    /// Mapea un lote con la estrategia propia del motor. `Ok(None)` sólo
    /// ocurre con RXNMapper cuando el lote falla entero.
    pub fn map_reaction_smiles_strings<S>(&self,
                                          library: Library,
                                          reaction_smiles_strings: &[S])
                                          -> Result<Option<Vec<MappingResult>>, A2amError>
        where S: AsRef<str> + Sync
    {
        match library {
            Library::ChytorchRxnMap => Ok(Some(self.chytorch_rxnmap.map_reaction_smiles_strings(reaction_smiles_strings))),
            Library::EpamIndigo => self.epam_indigo
                                       .map_reaction_smiles_strings(reaction_smiles_strings, self.number_of_cpu_cores)
                                       .map(Some),
            Library::RxnMapper => self.rxnmapper.map_reaction_smiles_strings(reaction_smiles_strings, self.batch_size),
        }
    }
}
