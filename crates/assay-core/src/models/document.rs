use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Claim, EvidenceItem};
use crate::errors::CoercionWarning;

/// A fully coerced score-ready document.
///
/// Claims keep the order of the input array so results can be written back
/// index for index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreReadyDocument {
    pub doc_id: String,
    pub evidence_items: Vec<EvidenceItem>,
    pub claims: Vec<Claim>,
    /// Fields the reader had to coerce.
    pub warnings: Vec<CoercionWarning>,
}

impl ScoreReadyDocument {
    pub fn new(doc_id: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            ..Self::default()
        }
    }

    /// Index of evidence items by id. The first item with a given id wins.
    pub fn evidence_index(&self) -> HashMap<&str, &EvidenceItem> {
        let mut index = HashMap::with_capacity(self.evidence_items.len());
        for item in &self.evidence_items {
            index.entry(item.evidence_id.as_str()).or_insert(item);
        }
        index
    }
}
