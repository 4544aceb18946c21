use std::io::Write;
use std::sync::Arc;

use a2am_core::{A2amConfig, AtomToAtomMapping, Library, MappingEngines};
use a2amengine::{AttentionGuidedParams, ChythonSmilesFlags, ChytorchRxnMapEngine, ChytorchRxnMapOutput, EngineError,
                 EpamIndigoEngine, IndigoAutomapOutput, IndigoAutomapRequest, ResetMappingParams, RxnMapperEngine,
                 RxnMapperModel, RxnMapperOutput, CHYTORCH_RXNMAP, EPAM_INDIGO, RXNMAPPER};
use clap::Parser;
use crc_a2am::cli::{self, Args, CliError};
use serde_json::Value;

// Motores de prueba: sin ">>" la reacción se considera inválida.
struct StubChytorch;

impl ChytorchRxnMapEngine for StubChytorch {
    fn map_reaction(&self, reaction_smiles: &str, _: &ChythonSmilesFlags, params: &ResetMappingParams)
                    -> Result<ChytorchRxnMapOutput, EngineError> {
        if !reaction_smiles.contains(">>") {
            return Err(EngineError::mapping(CHYTORCH_RXNMAP, "invalid smiles"));
        }
        Ok(ChytorchRxnMapOutput { mapped_reaction_smiles: format!("mapped:{reaction_smiles}"),
                                  score: 1.0 / params.multiplier })
    }
}

struct StubIndigo;

impl EpamIndigoEngine for StubIndigo {
    fn automap(&self, reaction_smiles: &str, request: &IndigoAutomapRequest) -> Result<IndigoAutomapOutput, EngineError> {
        if !reaction_smiles.contains(">>") {
            return Err(EngineError::mapping(EPAM_INDIGO, "reaction loader"));
        }
        Ok(IndigoAutomapOutput { reaction_smiles: format!("{}:{reaction_smiles}", request.mode),
                                 status_code: 1 })
    }
}

struct StubRxnMapper;
struct StubModel;

impl RxnMapperEngine for StubRxnMapper {
    fn load_model(&self) -> Result<Box<dyn RxnMapperModel>, EngineError> { Ok(Box::new(StubModel)) }
}

impl RxnMapperModel for StubModel {
    fn get_attention_guided_atom_maps(&self, rxns: &[&str], _: &AttentionGuidedParams)
                                      -> Result<Vec<RxnMapperOutput>, EngineError> {
        rxns.iter()
            .map(|r| {
                if !r.contains(">>") {
                    return Err(EngineError::mapping(RXNMAPPER, "tokenizer"));
                }
                Ok(RxnMapperOutput { mapped_rxn: Some(format!("mapped:{r}")), confidence: Some(0.75) })
            })
            .collect()
    }
}

fn engines() -> MappingEngines {
    MappingEngines { chytorch_rxnmap: Arc::new(StubChytorch),
                     epam_indigo: Arc::new(StubIndigo),
                     rxnmapper: Arc::new(StubRxnMapper) }
}

fn execute(argv: &[&str]) -> Result<String, CliError> {
    let args = Args::try_parse_from(argv).expect("argumentos válidos");
    let library = args.library()?;
    let config = A2amConfig { show_progress: false, ..Default::default() };
    let settings = cli::settings(&args, library, &config)?;
    let mapping = AtomToAtomMapping::new(settings, engines())?;
    let mut out = Vec::new();
    cli::run(&args, library, &mapping, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8"))
}

fn reaction_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("archivo temporal");
    for line in lines {
        writeln!(file, "{line}").expect("escritura");
    }
    file
}

#[test]
fn single_reaction_prints_two_lines() {
    let out = execute(&["map-reaction-smiles", "-l", "chytorch_rxnmap", "-s", "CO>>C=O"]).unwrap();
    assert_eq!(out, "Mapped Reaction SMILES: 'mapped:CO>>C=O'\nScore (Chytorch RxnMap): 0.57143\n");

    let out = execute(&["map-reaction-smiles", "-l", "epam_indigo", "-s", "CO>>C=O"]).unwrap();
    assert_eq!(out, "Mapped Reaction SMILES: 'discard:CO>>C=O'\nCompleted without Errors (EPAM Indigo): True\n");
}

#[test]
fn single_malformed_reaction_prints_none() {
    let out = execute(&["map-reaction-smiles", "-l", "rxnmapper", "-s", "not_a_reaction"]).unwrap();
    assert_eq!(out, "Mapped Reaction SMILES: None\nScore (RXNMapper): None\n");
}

#[test]
fn options_flag_reaches_the_engine() {
    let out = execute(&["map-reaction-smiles",
                        "-l",
                        "epam_indigo",
                        "-s",
                        "C>>C",
                        "--options",
                        r#"{"handle_existing_atom_to_atom_mapping":"keep","ignore_charges":true}"#]).unwrap();
    assert!(out.starts_with("Mapped Reaction SMILES: 'keep ignore_charges:C>>C'"), "{out}");

    let err = execute(&["map-reaction-smiles", "-l", "chytorch_rxnmap", "-s", "C>>C", "--options", r#"{"multiplier":-1}"#])
        .unwrap_err();
    assert!(matches!(err, CliError::Mapping(_)), "{err}");
}

#[test]
fn unknown_existing_mapping_mode_falls_back_to_discard() {
    let out = execute(&["map-reaction-smiles",
                        "-l",
                        "epam_indigo",
                        "-s",
                        "C>>C",
                        "--options",
                        r#"{"handle_existing_atom_to_atom_mapping":"overwrite"}"#]).unwrap();
    assert_eq!(out, "Mapped Reaction SMILES: 'discard:C>>C'\nCompleted without Errors (EPAM Indigo): True\n");
}

#[test]
fn file_mode_writes_json_lines_in_order() {
    let file = reaction_file(&["C>>C", "", "not_a_reaction", "  CO>>OC  "]);
    let path = file.path().to_str().unwrap();
    for library in ["chytorch_rxnmap", "epam_indigo"] {
        let out = execute(&["map-reaction-smiles", "-l", library, "-f", path, "--number_of_cpu_cores", "2"]).unwrap();
        let lines: Vec<Value> = out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(lines.len(), 3, "{library}");
        assert_eq!(lines[0]["index"], 0);
        assert_eq!(lines[1]["reaction_smiles"], "not_a_reaction");
        assert!(lines[1]["mapped_reaction_smiles"].is_null());
        assert_eq!(lines[2]["reaction_smiles"], "CO>>OC");
        assert!(lines[2]["mapped_reaction_smiles"].as_str().unwrap().ends_with("CO>>OC"));
    }
}

#[test]
fn rxnmapper_file_mode_fails_when_batch_fails() {
    let file = reaction_file(&["C>>C", "not_a_reaction"]);
    let path = file.path().to_str().unwrap();
    let err = execute(&["map-reaction-smiles", "-l", "rxnmapper", "-f", path, "--batch_size", "1"]).unwrap_err();
    assert!(matches!(err, CliError::BatchFailed { count: 2, .. }), "{err}");

    let file = reaction_file(&["C>>C", "CC>>CC", "CCC>>CCC"]);
    let path = file.path().to_str().unwrap();
    let out = execute(&["map-reaction-smiles", "-l", "rxnmapper", "-f", path, "--batch_size", "2"]).unwrap();
    assert_eq!(out.lines().count(), 3);
}

#[test]
fn invalid_worker_count_is_reported() {
    let err = execute(&["map-reaction-smiles", "-l", "epam_indigo", "-s", "C>>C", "--number_of_cpu_cores", "0"])
        .unwrap_err();
    assert!(matches!(err, CliError::Mapping(a2am_core::A2amError::InvalidConfig(_))));
}

#[test]
fn missing_file_is_read_error() {
    let err = execute(&["map-reaction-smiles", "-l", "epam_indigo", "-f", "/nonexistent/reactions.smi"]).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert_eq!(Library::EpamIndigo.display_name(), "EPAM Indigo");
}
