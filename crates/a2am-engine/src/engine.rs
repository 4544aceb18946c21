//! Contratos de los motores externos.
//!
//! Los tipos de petición reflejan los argumentos que acepta cada librería;
//! sus valores por defecto son los de la propia librería.
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Flags de lectura de `chython.smiles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChythonSmilesFlags {
    pub ignore: bool,
    pub remap: bool,
    pub ignore_stereo: bool,
    pub ignore_bad_isotopes: bool,
    pub keep_implicit: bool,
    pub ignore_carbon_radicals: bool,
    pub ignore_aromatic_radicals: bool,
}

impl Default for ChythonSmilesFlags {
    fn default() -> Self {
        Self { ignore: true,
               remap: false,
               ignore_stereo: false,
               ignore_bad_isotopes: false,
               keep_implicit: false,
               ignore_carbon_radicals: false,
               ignore_aromatic_radicals: true }
    }
}

/// Parámetros de `ReactionContainer.reset_mapping` (siempre con `return_score=True`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetMappingParams {
    pub multiplier: f64,
    pub keep_reactants_numbering: bool,
}

impl Default for ResetMappingParams {
    fn default() -> Self { Self { multiplier: 1.75, keep_reactants_numbering: false } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChytorchRxnMapOutput {
    /// Reacción renderizada con `format(reaction, "m")`.
    pub mapped_reaction_smiles: String,
    pub score: f64,
}

/// Petición de `IndigoObject.automap`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndigoAutomapRequest {
    /// Valor de la opción `aam-timeout`.
    pub timeout_period_ms: u64,
    /// Modo completo, p. ej. `"discard ignore_charges"`.
    pub mode: String,
    /// `canonicalSmiles()` si es verdadero, `smiles()` en caso contrario.
    pub canonicalize_reaction_smiles: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndigoAutomapOutput {
    pub reaction_smiles: String,
    /// Código devuelto por `automap`; 1 significa que terminó sin errores.
    pub status_code: i64,
}

/// Argumentos de `RXNMapper.get_attention_guided_atom_maps` salvo `rxns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttentionGuidedParams {
    pub zero_set_p: bool,
    pub zero_set_r: bool,
    pub canonicalize_rxns: bool,
    pub detailed_output: bool,
    pub absolute_product_inds: bool,
    pub force_layer: Option<u32>,
    pub force_head: Option<u32>,
}

impl Default for AttentionGuidedParams {
    fn default() -> Self {
        Self { zero_set_p: true,
               zero_set_r: true,
               canonicalize_rxns: true,
               detailed_output: false,
               absolute_product_inds: false,
               force_layer: None,
               force_head: None }
    }
}

/// Una entrada de la lista devuelta por RXNMapper. Ambas claves pueden faltar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RxnMapperOutput {
    pub mapped_rxn: Option<String>,
    pub confidence: Option<f64>,
}

pub trait ChytorchRxnMapEngine: Send + Sync {
    /// Lee la reacción, reasigna el mapeo y devuelve la reacción mapeada con su score.
    fn map_reaction(&self,
                    reaction_smiles: &str,
                    flags: &ChythonSmilesFlags,
                    params: &ResetMappingParams)
                    -> Result<ChytorchRxnMapOutput, EngineError>;
}

pub trait EpamIndigoEngine: Send + Sync {
    /// Crea una instancia de Indigo, carga la reacción y ejecuta `automap`.
    fn automap(&self, reaction_smiles: &str, request: &IndigoAutomapRequest) -> Result<IndigoAutomapOutput, EngineError>;
}

/// Fábrica de modelos RXNMapper. Cargar el modelo es caro, por eso el camino
/// por lotes lo carga una sola vez y lo reutiliza para todos los bloques.
pub trait RxnMapperEngine: Send + Sync {
    fn load_model(&self) -> Result<Box<dyn RxnMapperModel>, EngineError>;
}

pub trait RxnMapperModel {
    /// Llamada vectorizada: una salida por reacción, en el mismo orden.
    fn get_attention_guided_atom_maps(&self,
                                      rxns: &[&str],
                                      params: &AttentionGuidedParams)
                                      -> Result<Vec<RxnMapperOutput>, EngineError>;
}
