use a2am_core::{A2amError, AtomToAtomMapping, Library, MappingEngines, MappingResult, MappingSettings, QualitySignal};
use a2amengine::{AttentionGuidedParams, ChythonSmilesFlags, ChytorchRxnMapEngine, ChytorchRxnMapOutput, EngineError,
                 EpamIndigoEngine, IndigoAutomapOutput, IndigoAutomapRequest, ResetMappingParams, RxnMapperEngine,
                 RxnMapperModel, RxnMapperOutput, CHYTORCH_RXNMAP, EPAM_INDIGO, RXNMAPPER};
use std::sync::{Arc, Mutex};

const PREMAPPED: &str = "[CH3:1][OH:2]>>[CH3:1][O:2][H]";

// Motores de prueba: una reacción es válida si tiene reactivos y productos.
fn parse(smiles: &str) -> Option<(&str, &str)> {
    let mut parts = smiles.split('>');
    let reactants = parts.next()?;
    let _agents = parts.next()?;
    let products = parts.next()?;
    if reactants.is_empty() || products.is_empty() || parts.next().is_some() {
        return None;
    }
    Some((reactants, products))
}

/// Numera los átomos en orden de aparición si la reacción no trae mapeo.
fn annotate(smiles: &str) -> String {
    if smiles.contains(':') {
        return smiles.to_string();
    }
    let mut counter = 0;
    smiles.chars()
          .map(|c| {
              if c.is_ascii_uppercase() {
                  counter += 1;
                  format!("[{c}:{counter}]")
              } else {
                  c.to_string()
              }
          })
          .collect()
}

struct FakeChytorch;

impl ChytorchRxnMapEngine for FakeChytorch {
    fn map_reaction(&self, reaction_smiles: &str, _: &ChythonSmilesFlags, _: &ResetMappingParams)
                    -> Result<ChytorchRxnMapOutput, EngineError> {
        parse(reaction_smiles).ok_or_else(|| EngineError::mapping(CHYTORCH_RXNMAP, "invalid reaction"))?;
        Ok(ChytorchRxnMapOutput { mapped_reaction_smiles: annotate(reaction_smiles), score: 0.93 })
    }
}

struct FakeIndigo;

impl EpamIndigoEngine for FakeIndigo {
    fn automap(&self, reaction_smiles: &str, _: &IndigoAutomapRequest) -> Result<IndigoAutomapOutput, EngineError> {
        parse(reaction_smiles).ok_or_else(|| EngineError::mapping(EPAM_INDIGO, "reaction loader error"))?;
        Ok(IndigoAutomapOutput { reaction_smiles: annotate(reaction_smiles), status_code: 1 })
    }
}

#[derive(Default)]
struct FakeRxnMapper {
    batches: Arc<Mutex<Vec<Vec<String>>>>,
}

struct FakeModel {
    batches: Arc<Mutex<Vec<Vec<String>>>>,
}

impl RxnMapperEngine for FakeRxnMapper {
    fn load_model(&self) -> Result<Box<dyn RxnMapperModel>, EngineError> {
        Ok(Box::new(FakeModel { batches: Arc::clone(&self.batches) }))
    }
}

impl RxnMapperModel for FakeModel {
    fn get_attention_guided_atom_maps(&self, rxns: &[&str], _: &AttentionGuidedParams)
                                      -> Result<Vec<RxnMapperOutput>, EngineError> {
        self.batches.lock().unwrap().push(rxns.iter().map(|r| r.to_string()).collect());
        rxns.iter()
            .map(|r| {
                parse(r).ok_or_else(|| EngineError::mapping(RXNMAPPER, format!("tokenizer: {r}")))?;
                Ok(RxnMapperOutput { mapped_rxn: Some(annotate(r)), confidence: Some(0.81) })
            })
            .collect()
    }
}

fn facade_with(rxnmapper: Arc<FakeRxnMapper>, settings: MappingSettings) -> AtomToAtomMapping {
    let engines = MappingEngines { chytorch_rxnmap: Arc::new(FakeChytorch),
                                   epam_indigo: Arc::new(FakeIndigo),
                                   rxnmapper };
    AtomToAtomMapping::new(settings, engines).expect("configuración válida")
}

fn facade() -> AtomToAtomMapping {
    facade_with(Arc::new(FakeRxnMapper::default()),
                MappingSettings { show_progress: false, number_of_cpu_cores: 3, ..Default::default() })
}

fn signal_in_domain(library: Library, signal: QualitySignal) -> bool {
    match (library, signal) {
        (Library::EpamIndigo, QualitySignal::CompletedWithoutErrors(flag)) => flag,
        (Library::ChytorchRxnMap | Library::RxnMapper, QualitySignal::Score(score)) => (0.0..=1.0).contains(&score),
        _ => false,
    }
}

#[test]
fn valid_reaction_is_mapped_by_every_backend() {
    let facade = facade();
    for library in Library::ALL {
        let result = facade.map_reaction_smiles(library, "CC(=O)O.OCC>>CC(=O)OCC.O");
        assert!(result.mapped_reaction_smiles.is_some(), "{library}: sin SMILES mapeado");
        assert!(result.quality_signal.is_some(), "{library}: sin señal de calidad");
    }
}

#[test]
fn malformed_reaction_gives_absent_pair_for_every_backend() {
    let facade = facade();
    for library in Library::ALL {
        assert_eq!(facade.map_reaction_smiles(library, "not_a_reaction"), MappingResult::failed(), "{library}");
    }
}

#[test]
fn premapped_reaction_keeps_annotations_and_signal_domain() {
    let facade = facade();
    for library in Library::ALL {
        let result = facade.map_reaction_smiles(library, PREMAPPED);
        let mapped = result.mapped_reaction_smiles.expect("mapeado");
        assert!(mapped.contains(":1]") && mapped.contains(":2]"), "{library}: {mapped}");
        assert!(signal_in_domain(library, result.quality_signal.expect("señal")), "{library}");
    }
}

#[test]
fn batch_preserves_order_with_duplicates_and_malformed_entries() {
    let facade = facade();
    let inputs = vec!["C>>C", "not_a_reaction", "CO>>OC", "C>>C", ">>", "CCO>>CC=O", "not_a_reaction"];
    for library in [Library::ChytorchRxnMap, Library::EpamIndigo] {
        let results = facade.map_reaction_smiles_strings(library, &inputs).unwrap().unwrap();
        assert_eq!(results.len(), inputs.len());
        for (input, result) in inputs.iter().zip(&results) {
            assert_eq!(result, &facade.map_reaction_smiles(library, input), "{library}: {input}");
        }
        // vecinos válidos de una entrada mal formada siguen mapeados
        assert!(!results[0].is_failed() && !results[2].is_failed());
        assert_eq!(results[0], results[3]);
    }
}

#[test]
fn rxnmapper_chunks_and_flattens_in_order() {
    let rxnmapper = Arc::new(FakeRxnMapper::default());
    let facade = facade_with(Arc::clone(&rxnmapper),
                             MappingSettings { show_progress: false, batch_size: 10, ..Default::default() });
    let inputs: Vec<String> = (1..=25).map(|i| format!("{}>>{}", "C".repeat(i), "C".repeat(i))).collect();
    let results = facade.map_reaction_smiles_strings(Library::RxnMapper, &inputs).unwrap().expect("lote completo");
    let sizes: Vec<usize> = rxnmapper.batches.lock().unwrap().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![10, 10, 5]);
    assert_eq!(results.len(), 25);
    for (input, result) in inputs.iter().zip(&results) {
        assert_eq!(result.mapped_reaction_smiles.as_deref(), Some(annotate(input).as_str()));
    }
}

#[test]
fn rxnmapper_batch_fails_as_a_whole() {
    let facade = facade();
    let inputs = ["C>>C", "not_a_reaction", "CO>>OC"];
    assert_eq!(facade.map_reaction_smiles_strings(Library::RxnMapper, &inputs).unwrap(), None);
}

#[test]
fn unknown_library_is_caller_error() {
    let err = "indigo".parse::<Library>().unwrap_err();
    assert!(matches!(err, A2amError::UnknownLibrary(_)));
}
