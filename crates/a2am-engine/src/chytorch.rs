//! Chytorch RxnMap a través de `chython`.
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{import, mapping_error};
use crate::engine::{ChythonSmilesFlags, ChytorchRxnMapEngine, ChytorchRxnMapOutput, ResetMappingParams};
use crate::{EngineError, CHYTORCH_RXNMAP};

/// Motor respaldado por Python. Cada llamada lee su propia reacción, no hay
/// estado compartido entre llamadas.
#[derive(Debug, Clone, Copy, Default)]
pub struct PyChytorchRxnMap;

impl ChytorchRxnMapEngine for PyChytorchRxnMap {
    fn map_reaction(&self,
                    reaction_smiles: &str,
                    flags: &ChythonSmilesFlags,
                    params: &ResetMappingParams)
                    -> Result<ChytorchRxnMapOutput, EngineError> {
        Python::attach(|py| {
            let smiles = import(py, CHYTORCH_RXNMAP, "chython.files.daylight.smiles")?
                .getattr("smiles")
                .map_err(|e| mapping_error(CHYTORCH_RXNMAP, e))?;
            reset_mapping(py, &smiles, reaction_smiles, flags, params).map_err(|e| mapping_error(CHYTORCH_RXNMAP, e))
        })
    }
}

fn reset_mapping(py: Python<'_>,
                 smiles: &Bound<'_, PyAny>,
                 reaction_smiles: &str,
                 flags: &ChythonSmilesFlags,
                 params: &ResetMappingParams)
                 -> PyResult<ChytorchRxnMapOutput> {
    let parse_kwargs = PyDict::new(py);
    parse_kwargs.set_item("ignore", flags.ignore)?;
    parse_kwargs.set_item("remap", flags.remap)?;
    parse_kwargs.set_item("ignore_stereo", flags.ignore_stereo)?;
    parse_kwargs.set_item("ignore_bad_isotopes", flags.ignore_bad_isotopes)?;
    parse_kwargs.set_item("keep_implicit", flags.keep_implicit)?;
    parse_kwargs.set_item("ignore_carbon_radicals", flags.ignore_carbon_radicals)?;
    parse_kwargs.set_item("ignore_aromatic_radicals", flags.ignore_aromatic_radicals)?;
    let reaction = smiles.call((reaction_smiles,), Some(&parse_kwargs))?;

    let mapping_kwargs = PyDict::new(py);
    mapping_kwargs.set_item("return_score", true)?;
    mapping_kwargs.set_item("multiplier", params.multiplier)?;
    mapping_kwargs.set_item("keep_reactants_numbering", params.keep_reactants_numbering)?;
    let score: f64 = reaction.call_method("reset_mapping", (), Some(&mapping_kwargs))?.extract()?;

    // format(reaction, "m") incluye los números de mapeo en el SMILES
    let mapped_reaction_smiles: String = py.import("builtins")?
                                           .getattr("format")?
                                           .call1((&reaction, "m"))?
                                           .extract()?;
    Ok(ChytorchRxnMapOutput { mapped_reaction_smiles, score })
}
