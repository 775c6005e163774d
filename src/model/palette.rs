use std::{collections::BTreeMap, path::Path};

use crate::{
    foundation::error::{PlotError, PlotResult},
    model::color::Rgb8,
};

/// One dominant color of a screenshot, as emitted by the palette extractor.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaletteColor {
    /// sRGB color.
    pub color: Rgb8,
    /// Fraction `[0, 1]` of the screenshot's pixels binned to this color.
    pub amount: f64,
}

/// A screenshot and its ranked palette.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Screenshot {
    /// Path of the screenshot relative to the thumbnail root, `film/name.jpg`.
    pub src: String,
    /// Palette colors, most dominant first.
    pub colors: Vec<PaletteColor>,
}

impl Screenshot {
    /// Film name: the first path segment of `src`.
    pub fn film(&self) -> &str {
        self.src.split('/').next().unwrap_or_default()
    }
}

/// Palettes for every film, keyed by film name.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PaletteSet {
    films: BTreeMap<String, Vec<Screenshot>>,
}

impl PaletteSet {
    /// Parse the extractor's JSON output.
    pub fn from_json_str(json: &str) -> PlotResult<Self> {
        serde_json::from_str(json).map_err(|e| PlotError::serde(e.to_string()))
    }

    /// Read and parse a palette file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> PlotResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| PlotError::io(format!("read palettes '{}': {e}", path.display())))?;
        let set = Self::from_json_str(&json)?;
        tracing::debug!(films = set.films.len(), "loaded palettes");
        Ok(set)
    }

    /// Screenshots of one film, in extraction order.
    pub fn film(&self, name: &str) -> PlotResult<&[Screenshot]> {
        self.films
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| PlotError::validation(format!("unknown film '{name}'")))
    }

    /// Film names in sorted order.
    pub fn films(&self) -> impl Iterator<Item = &str> {
        self.films.keys().map(String::as_str)
    }

    /// `(film, screenshots)` pairs in sorted film order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Screenshot])> {
        self.films.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Add or replace a film.
    pub fn insert(&mut self, film: impl Into<String>, screenshots: Vec<Screenshot>) {
        self.films.insert(film.into(), screenshots);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/palette.rs"]
mod tests;
