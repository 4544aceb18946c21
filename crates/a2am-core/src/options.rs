//! Opciones tipadas por motor.
//!
//! Los valores por defecto coinciden con los de cada librería. Las
//! combinaciones inválidas se rechazan al construir el adaptador
//! (`validate`), antes de llegar al motor.
use a2amengine::{AttentionGuidedParams, ChythonSmilesFlags, IndigoAutomapRequest, ResetMappingParams};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{A2amError, Library};

/// Opciones de Chytorch RxnMap: lectura con `chython.smiles` y mapeo con
/// `reset_mapping`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChytorchRxnMapOptions {
    pub ignore: bool,
    pub remap: bool,
    pub ignore_stereo: bool,
    pub ignore_bad_isotopes: bool,
    pub keep_implicit: bool,
    pub ignore_carbon_radicals: bool,
    pub ignore_aromatic_radicals: bool,
    /// Factor de la atención en `reset_mapping`.
    pub multiplier: f64,
    pub keep_reactants_numbering: bool,
}

impl Default for ChytorchRxnMapOptions {
    fn default() -> Self {
        let flags = ChythonSmilesFlags::default();
        let params = ResetMappingParams::default();
        Self { ignore: flags.ignore,
               remap: flags.remap,
               ignore_stereo: flags.ignore_stereo,
               ignore_bad_isotopes: flags.ignore_bad_isotopes,
               keep_implicit: flags.keep_implicit,
               ignore_carbon_radicals: flags.ignore_carbon_radicals,
               ignore_aromatic_radicals: flags.ignore_aromatic_radicals,
               multiplier: params.multiplier,
               keep_reactants_numbering: params.keep_reactants_numbering }
    }
}

impl ChytorchRxnMapOptions {
    pub fn validate(&self) -> Result<(), A2amError> {
        if !self.multiplier.is_finite() || self.multiplier <= 0.0 {
            return Err(A2amError::invalid_options(Library::ChytorchRxnMap.display_name(),
                                                  format!("multiplier debe ser finito y mayor que 0 (recibido {})",
                                                          self.multiplier)));
        }
        Ok(())
    }

    pub fn smiles_flags(&self) -> ChythonSmilesFlags {
        ChythonSmilesFlags { ignore: self.ignore,
                             remap: self.remap,
                             ignore_stereo: self.ignore_stereo,
                             ignore_bad_isotopes: self.ignore_bad_isotopes,
                             keep_implicit: self.keep_implicit,
                             ignore_carbon_radicals: self.ignore_carbon_radicals,
                             ignore_aromatic_radicals: self.ignore_aromatic_radicals }
    }

    pub fn reset_mapping_params(&self) -> ResetMappingParams {
        ResetMappingParams { multiplier: self.multiplier, keep_reactants_numbering: self.keep_reactants_numbering }
    }
}

/// Tratamiento del mapeo existente en EPAM Indigo (`automap`).
///
/// Al deserializar, un token desconocido cae en `discard` igual que en
/// [`ExistingMappingMode::from_token_or_default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExistingMappingMode {
    Alter,
    Clear,
    #[default]
    Discard,
    Keep,
}

impl ExistingMappingMode {
    pub const ALL: [ExistingMappingMode; 4] =
        [ExistingMappingMode::Alter, ExistingMappingMode::Clear, ExistingMappingMode::Discard, ExistingMappingMode::Keep];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExistingMappingMode::Alter => "alter",
            ExistingMappingMode::Clear => "clear",
            ExistingMappingMode::Discard => "discard",
            ExistingMappingMode::Keep => "keep",
        }
    }

    /// Cualquier token fuera de {alter, clear, discard, keep} cae en `discard`.
    pub fn from_token_or_default(token: &str) -> Self { token.parse().unwrap_or_default() }
}

impl FromStr for ExistingMappingMode {
    type Err = A2amError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExistingMappingMode::ALL.into_iter()
                                .find(|mode| mode.as_str() == s)
                                .ok_or_else(|| {
                                    A2amError::invalid_options(Library::EpamIndigo.display_name(),
                                                               format!("modo de mapeo existente desconocido: '{s}'"))
                                })
    }
}

impl<'de> Deserialize<'de> for ExistingMappingMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        let token = String::deserialize(deserializer)?;
        Ok(ExistingMappingMode::from_token_or_default(&token))
    }
}

impl fmt::Display for ExistingMappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Opciones de EPAM Indigo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EpamIndigoOptions {
    /// Tiempo máximo (ms) para el mapeo de una reacción (`aam-timeout`).
    pub timeout_period_ms: u64,
    pub handle_existing_atom_to_atom_mapping: ExistingMappingMode,
    pub ignore_charges: bool,
    pub ignore_isotopes: bool,
    pub ignore_valences: bool,
    pub ignore_radicals: bool,
    pub canonicalize_reaction_smiles: bool,
}

impl Default for EpamIndigoOptions {
    fn default() -> Self {
        Self { timeout_period_ms: 10_000,
               handle_existing_atom_to_atom_mapping: ExistingMappingMode::Discard,
               ignore_charges: false,
               ignore_isotopes: false,
               ignore_valences: false,
               ignore_radicals: false,
               canonicalize_reaction_smiles: true }
    }
}

impl EpamIndigoOptions {
    /// Fija el modo a partir de un token libre, con la misma tolerancia que
    /// [`ExistingMappingMode::from_token_or_default`].
    pub fn with_existing_mapping_token(mut self, token: &str) -> Self {
        self.handle_existing_atom_to_atom_mapping = ExistingMappingMode::from_token_or_default(token);
        self
    }

    /// Modo de `automap`: token base seguido de los flags `ignore_*` activos.
    pub fn automap_mode(&self) -> String {
        let mut mode = self.handle_existing_atom_to_atom_mapping.as_str().to_string();
        let flags = [(self.ignore_charges, " ignore_charges"),
                     (self.ignore_isotopes, " ignore_isotopes"),
                     (self.ignore_valences, " ignore_valence"),
                     (self.ignore_radicals, " ignore_radicals")];
        for (enabled, suffix) in flags {
            if enabled {
                mode.push_str(suffix);
            }
        }
        mode
    }

    pub fn validate(&self) -> Result<(), A2amError> {
        let library = Library::EpamIndigo.display_name();
        if self.timeout_period_ms == 0 {
            return Err(A2amError::invalid_options(library, "timeout_period_ms debe ser mayor que 0"));
        }
        // Indigo guarda la opción como entero de 32 bits
        if self.timeout_period_ms > i32::MAX as u64 {
            return Err(A2amError::invalid_options(library,
                                                  format!("timeout_period_ms excede {} ms (recibido {})",
                                                          i32::MAX,
                                                          self.timeout_period_ms)));
        }
        Ok(())
    }

    pub fn automap_request(&self) -> IndigoAutomapRequest {
        IndigoAutomapRequest { timeout_period_ms: self.timeout_period_ms,
                               mode: self.automap_mode(),
                               canonicalize_reaction_smiles: self.canonicalize_reaction_smiles }
    }
}

/// Opciones de `RXNMapper.get_attention_guided_atom_maps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RxnMapperOptions {
    pub zero_set_p: bool,
    pub zero_set_r: bool,
    pub canonicalize_rxns: bool,
    pub detailed_output: bool,
    pub absolute_product_inds: bool,
    pub force_layer: Option<u32>,
    pub force_head: Option<u32>,
}

impl Default for RxnMapperOptions {
    fn default() -> Self {
        let params = AttentionGuidedParams::default();
        Self { zero_set_p: params.zero_set_p,
               zero_set_r: params.zero_set_r,
               canonicalize_rxns: params.canonicalize_rxns,
               detailed_output: params.detailed_output,
               absolute_product_inds: params.absolute_product_inds,
               force_layer: params.force_layer,
               force_head: params.force_head }
    }
}

impl RxnMapperOptions {
    pub fn validate(&self) -> Result<(), A2amError> {
        if self.force_head.is_some() && self.force_layer.is_none() {
            return Err(A2amError::invalid_options(Library::RxnMapper.display_name(),
                                                  "force_head requiere fijar también force_layer"));
        }
        Ok(())
    }

    pub fn attention_params(&self) -> AttentionGuidedParams {
        AttentionGuidedParams { zero_set_p: self.zero_set_p,
                                zero_set_r: self.zero_set_r,
                                canonicalize_rxns: self.canonicalize_rxns,
                                detailed_output: self.detailed_output,
                                absolute_product_inds: self.absolute_product_inds,
                                force_layer: self.force_layer,
                                force_head: self.force_head }
    }
}
