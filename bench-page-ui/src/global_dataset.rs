//! Dataset preloaded by the page as a global variable.

use bench_data::source::parse_dataset;
use bench_data::{DataRecord, DatasetError, DatasetSource};
use js_sys::{Reflect, JSON};
use wasm_bindgen::JsValue;

/// Global the site generator assigns each task's records to.
pub const DEFAULT_DATASET_GLOBAL: &str = "importedData";

/// Reads records from a page global (an array of record objects).
#[derive(Debug, Clone)]
pub struct GlobalDataset {
    name: String,
}

impl GlobalDataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for GlobalDataset {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_GLOBAL)
    }
}

impl DatasetSource for GlobalDataset {
    fn load(&self) -> Result<Vec<DataRecord>, DatasetError> {
        let value = Reflect::get(&js_sys::global(), &JsValue::from_str(&self.name))
            .unwrap_or(JsValue::UNDEFINED);
        if value.is_undefined() || value.is_null() {
            return Err(DatasetError::Unavailable(format!(
                "page global `{}` is not defined",
                self.name
            )));
        }

        // Round-trip through JSON; serde validates the records.
        let json: String = JSON::stringify(&value)
            .map_err(|_| {
                DatasetError::Unavailable(format!("page global `{}` is not JSON", self.name))
            })?
            .into();
        parse_dataset(&json)
    }
}
