//! RXNMapper (`rxnmapper.core.RXNMapper`).
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{import, mapping_error};
use crate::engine::{AttentionGuidedParams, RxnMapperEngine, RxnMapperModel, RxnMapperOutput};
use crate::{EngineError, RXNMAPPER};

#[derive(Debug, Clone, Copy, Default)]
pub struct PyRxnMapper;

impl RxnMapperEngine for PyRxnMapper {
    fn load_model(&self) -> Result<Box<dyn RxnMapperModel>, EngineError> {
        Python::attach(|py| {
            let model = import(py, RXNMAPPER, "rxnmapper.core")?.getattr("RXNMapper")
                                                                .and_then(|class| class.call0())
                                                                .map_err(|e| EngineError::init(RXNMAPPER, e.to_string()))?;
            log::debug!("modelo RXNMapper cargado");
            Ok(Box::new(PyRxnMapperModel { model: model.unbind() }) as Box<dyn RxnMapperModel>)
        })
    }
}

/// Modelo cargado; sólo guarda la referencia al objeto Python.
pub struct PyRxnMapperModel {
    model: Py<PyAny>,
}

impl RxnMapperModel for PyRxnMapperModel {
    fn get_attention_guided_atom_maps(&self,
                                      rxns: &[&str],
                                      params: &AttentionGuidedParams)
                                      -> Result<Vec<RxnMapperOutput>, EngineError> {
        Python::attach(|py| attention_guided_atom_maps(py, self.model.bind(py), rxns, params).map_err(|e| mapping_error(RXNMAPPER, e)))
    }
}

fn attention_guided_atom_maps(py: Python<'_>,
                              model: &Bound<'_, PyAny>,
                              rxns: &[&str],
                              params: &AttentionGuidedParams)
                              -> PyResult<Vec<RxnMapperOutput>> {
    let kwargs = PyDict::new(py);
    kwargs.set_item("rxns", rxns.to_vec())?;
    kwargs.set_item("zero_set_p", params.zero_set_p)?;
    kwargs.set_item("zero_set_r", params.zero_set_r)?;
    kwargs.set_item("canonicalize_rxns", params.canonicalize_rxns)?;
    kwargs.set_item("detailed_output", params.detailed_output)?;
    kwargs.set_item("absolute_product_inds", params.absolute_product_inds)?;
    kwargs.set_item("force_layer", params.force_layer)?;
    kwargs.set_item("force_head", params.force_head)?;
    let outputs = model.call_method("get_attention_guided_atom_maps", (), Some(&kwargs))?;

    let mut parsed = Vec::with_capacity(rxns.len());
    for item in outputs.try_iter()? {
        let item = item?;
        let output = item.downcast::<PyDict>()?;
        let mapped_rxn = match output.get_item("mapped_rxn")? {
            Some(value) => value.extract::<Option<String>>()?,
            None => None,
        };
        let confidence = match output.get_item("confidence")? {
            Some(value) => value.extract::<Option<f64>>()?,
            None => None,
        };
        parsed.push(RxnMapperOutput { mapped_rxn, confidence });
    }
    Ok(parsed)
}
