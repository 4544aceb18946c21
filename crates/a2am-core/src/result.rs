use serde::{Deserialize, Serialize};
use std::fmt;

/// Señal de calidad que acompaña a un mapeo. Su tipo depende del motor:
/// score continuo (Chytorch RxnMap, RXNMapper) o indicador booleano (EPAM Indigo).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QualitySignal {
    Score(f64),
    CompletedWithoutErrors(bool),
}

impl QualitySignal {
    pub fn score(&self) -> Option<f64> {
        match self {
            QualitySignal::Score(score) => Some(*score),
            QualitySignal::CompletedWithoutErrors(_) => None,
        }
    }

    pub fn completed_without_errors(&self) -> Option<bool> {
        match self {
            QualitySignal::CompletedWithoutErrors(flag) => Some(*flag),
            QualitySignal::Score(_) => None,
        }
    }
}

impl fmt::Display for QualitySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualitySignal::Score(score) => write!(f, "{score:.5}"),
            QualitySignal::CompletedWithoutErrors(true) => write!(f, "True"),
            QualitySignal::CompletedWithoutErrors(false) => write!(f, "False"),
        }
    }
}

/// Resultado de mapear una reacción: SMILES mapeado y señal de calidad,
/// ambos opcionales. Un fallo del motor produce [`MappingResult::failed`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    pub mapped_reaction_smiles: Option<String>,
    pub quality_signal: Option<QualitySignal>,
}

impl MappingResult {
    pub fn new(mapped_reaction_smiles: Option<String>, quality_signal: Option<QualitySignal>) -> Self {
        Self { mapped_reaction_smiles, quality_signal }
    }

    pub fn mapped(mapped_reaction_smiles: impl Into<String>, quality_signal: QualitySignal) -> Self {
        Self { mapped_reaction_smiles: Some(mapped_reaction_smiles.into()), quality_signal: Some(quality_signal) }
    }

    /// `(ausente, ausente)`.
    pub fn failed() -> Self { Self::default() }

    pub fn is_failed(&self) -> bool { self.mapped_reaction_smiles.is_none() && self.quality_signal.is_none() }

    pub fn into_tuple(self) -> (Option<String>, Option<QualitySignal>) { (self.mapped_reaction_smiles, self.quality_signal) }
}
