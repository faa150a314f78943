//! Dataset loading and the store owning the full/filtered record pair.
//!
//! The CSV ships with the app. On wasm it is fetched from the bundled asset
//! URL; natively it is embedded at compile time, mirroring how the desktop
//! shell embeds its theme. Either way the bytes pass through the same serde
//! decoder into typed records.

use std::fmt;

use super::filter::{self, FilterCriteria};
use super::record::Record;

#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
const DATASET_CSV: Asset = asset!("/assets/data/prostate_risk.csv");

/// Why a dataset failed to load. Shown once in a blocking banner; the
/// dashboard stays uninitialized and nothing retries automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    Fetch(String),
    Decode(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Fetch(detail) => write!(f, "couldn't fetch the dataset: {detail}"),
            DatasetError::Decode(detail) => write!(f, "couldn't decode the dataset: {detail}"),
        }
    }
}

impl std::error::Error for DatasetError {}

/// Decode CSV text into typed records, strict about headers and domains.
pub fn parse_dataset(text: &str) -> Result<Vec<Record>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    reader
        .deserialize()
        .collect::<Result<Vec<Record>, csv::Error>>()
        .map_err(|err| DatasetError::Decode(err.to_string()))
}

/// Fetch and decode the bundled dataset (wasm build).
#[cfg(target_arch = "wasm32")]
pub async fn load_dataset() -> Result<Vec<Record>, DatasetError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window =
        web_sys::window().ok_or_else(|| DatasetError::Fetch("no window object".into()))?;

    let response = JsFuture::from(window.fetch_with_str(&DATASET_CSV.to_string()))
        .await
        .map_err(js_error)?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| DatasetError::Fetch("fetch returned a non-response value".into()))?;

    if !response.ok() {
        return Err(DatasetError::Fetch(format!(
            "request failed with status {}",
            response.status()
        )));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| DatasetError::Fetch("response body was not text".into()))?;

    parse_dataset(&text)
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> DatasetError {
    DatasetError::Fetch(format!("{err:?}"))
}

/// Decode the compile-time embedded dataset (native builds).
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_dataset() -> Result<Vec<Record>, DatasetError> {
    const DATASET_CSV_INLINE: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/data/prostate_risk.csv"
    ));
    parse_dataset(DATASET_CSV_INLINE)
}

/// Owner of the loaded dataset and the currently filtered subset.
///
/// `full` is written once at construction. `filtered` is replaced wholesale
/// on every criteria change and always preserves the original record order.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStore {
    full: Vec<Record>,
    filtered: Vec<Record>,
    criteria: FilterCriteria,
}

impl DatasetStore {
    pub fn new(full: Vec<Record>) -> Self {
        let criteria = FilterCriteria::default();
        let filtered = filter::apply(&full, &criteria);
        Self {
            full,
            filtered,
            criteria,
        }
    }

    pub fn full(&self) -> &[Record] {
        &self.full
    }

    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Single entry point for filter changes: snapshot the new criteria and
    /// recompute the filtered subset from scratch.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.filtered = filter::apply(&self.full, &self.criteria);
    }

    pub fn reset(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }
}
