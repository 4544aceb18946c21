//! EPAM Indigo (`indigo` en Python).
use pyo3::prelude::*;

use crate::core::{import, mapping_error};
use crate::engine::{EpamIndigoEngine, IndigoAutomapOutput, IndigoAutomapRequest};
use crate::{EngineError, EPAM_INDIGO};

/// Crea una instancia nueva de `Indigo()` en cada llamada, así varios hilos
/// nunca comparten la misma sesión.
#[derive(Debug, Clone, Copy, Default)]
pub struct PyEpamIndigo;

impl EpamIndigoEngine for PyEpamIndigo {
    fn automap(&self, reaction_smiles: &str, request: &IndigoAutomapRequest) -> Result<IndigoAutomapOutput, EngineError> {
        Python::attach(|py| {
            let indigo_class = import(py, EPAM_INDIGO, "indigo")?.getattr("Indigo")
                                                                 .map_err(|e| EngineError::init(EPAM_INDIGO, e.to_string()))?;
            let indigo = indigo_class.call0().map_err(|e| EngineError::init(EPAM_INDIGO, e.to_string()))?;
            automap(&indigo, reaction_smiles, request).map_err(|e| mapping_error(EPAM_INDIGO, e))
        })
    }
}

fn automap(indigo: &Bound<'_, PyAny>, reaction_smiles: &str, request: &IndigoAutomapRequest) -> PyResult<IndigoAutomapOutput> {
    indigo.call_method1("setOption", ("aam-timeout", request.timeout_period_ms))?;
    let reaction = indigo.call_method1("loadReactionSmarts", (reaction_smiles,))?;
    let status_code: i64 = reaction.call_method1("automap", (request.mode.as_str(),))?.extract()?;
    let render = if request.canonicalize_reaction_smiles { "canonicalSmiles" } else { "smiles" };
    let reaction_smiles: String = reaction.call_method0(render)?.extract()?;
    Ok(IndigoAutomapOutput { reaction_smiles, status_code })
}
