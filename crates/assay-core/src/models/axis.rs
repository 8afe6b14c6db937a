use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// The five ICJ-style evidentiary quality axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Custody,
    Credibility,
    Corroboration,
    Clarity,
    Confidence,
}

impl Axis {
    pub const ALL: [Axis; 5] = [
        Axis::Custody,
        Axis::Credibility,
        Axis::Corroboration,
        Axis::Clarity,
        Axis::Confidence,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Axis::Custody => "custody",
            Axis::Credibility => "credibility",
            Axis::Corroboration => "corroboration",
            Axis::Clarity => "clarity",
            Axis::Confidence => "confidence",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per axis, serialized as an object keyed by axis name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerAxis<T> {
    pub custody: T,
    pub credibility: T,
    pub corroboration: T,
    pub clarity: T,
    pub confidence: T,
}

impl<T> PerAxis<T> {
    /// Build a table by evaluating `f` once per axis, in [`Axis::ALL`] order.
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self {
            custody: f(Axis::Custody),
            credibility: f(Axis::Credibility),
            corroboration: f(Axis::Corroboration),
            clarity: f(Axis::Clarity),
            confidence: f(Axis::Confidence),
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Axis, &T) -> U) -> PerAxis<U> {
        PerAxis::from_fn(|axis| f(axis, &self[axis]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().map(move |axis| (axis, &self[axis]))
    }
}

impl PerAxis<f64> {
    pub fn splat(value: f64) -> Self {
        Self::from_fn(|_| value)
    }

    pub fn zeros() -> Self {
        Self::splat(0.0)
    }
}

impl Default for PerAxis<f64> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T> Index<Axis> for PerAxis<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::Custody => &self.custody,
            Axis::Credibility => &self.credibility,
            Axis::Corroboration => &self.corroboration,
            Axis::Clarity => &self.clarity,
            Axis::Confidence => &self.confidence,
        }
    }
}

impl<T> IndexMut<Axis> for PerAxis<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::Custody => &mut self.custody,
            Axis::Credibility => &mut self.credibility,
            Axis::Corroboration => &mut self.corroboration,
            Axis::Clarity => &mut self.clarity,
            Axis::Confidence => &mut self.confidence,
        }
    }
}
