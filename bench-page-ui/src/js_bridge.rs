//! Typed wrapper around the page's grouped bar chart factory.
//!
//! The chart helpers (`GroupedBarChart`, `LineChart`, `Histogram`) are D3.js
//! functions the page loads as classic scripts before the wasm bundle, so they
//! are plain globals. Records and options are serialized with serde and parsed
//! into JS objects; the accessors and the activation callback are attached as
//! JS functions.

use crate::error::PageError;
use bench_data::DataRecord;
use js_sys::{Array, Function, Object, Reflect, JSON};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// Global name of the grouped bar chart factory.
pub const GROUPED_BAR_CHART: &str = "GroupedBarChart";

/// Chart margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 10.0,
            bottom: 100.0,
            left: 50.0,
        }
    }
}

/// Static options passed to the chart factory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Outer width; the binder sets it to the task container's width.
    pub width: f64,
    pub height: f64,
    pub x_label: String,
    pub y_label: String,
    pub margin: Margin,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 500.0,
            x_label: "Arguments →".to_string(),
            y_label: "Run Time (ms) ↑".to_string(),
            margin: Margin::default(),
        }
    }
}

impl ChartOptions {
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), PageError> {
    Reflect::set(target, &JsValue::from_str(key), value)?;
    Ok(())
}

/// Collect the string entries of the selection the chart hands its callback.
fn selection_from_js(value: &JsValue) -> Vec<String> {
    if !Array::is_array(value) {
        return Vec::new();
    }
    Array::from(value)
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

/// Build a grouped bar chart of `records` and return its root element.
///
/// Bars are valued by `runTime`, grouped by `arguments` and split by
/// `libraryName`. `on_activate` receives the selected library names every time
/// the user changes the chart's selection; it lives as long as the page.
pub fn render_grouped_bar_chart(
    records: &[DataRecord],
    options: &ChartOptions,
    on_activate: impl FnMut(Vec<String>) + 'static,
) -> Result<Element, PageError> {
    let factory = Reflect::get(&js_sys::global(), &JsValue::from_str(GROUPED_BAR_CHART))?
        .dyn_into::<Function>()
        .map_err(|_| PageError::ChartFactoryMissing(GROUPED_BAR_CHART))?;

    let data = JSON::parse(&serde_json::to_string(records)?)?;
    let config: Object = JSON::parse(&serde_json::to_string(options)?)?.unchecked_into();

    set(&config, "values", &Function::new_with_args("d", "return d.runTime;"))?;
    set(&config, "categories", &Function::new_with_args("d", "return d.arguments;"))?;
    // factory's own spelling
    set(&config, "inerClass", &Function::new_with_args("d", "return d.libraryName;"))?;

    let mut on_activate = on_activate;
    let callback = Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |selected: JsValue| {
        on_activate(selection_from_js(&selected));
    }));
    set(&config, "activationFunction", callback.as_ref())?;
    callback.forget();

    let chart = factory.call2(&JsValue::NULL, &data, &config)?;
    log::info!(
        "js_bridge: {} rendered {} records",
        GROUPED_BAR_CHART,
        records.len()
    );
    chart.dyn_into::<Element>().map_err(|value| {
        PageError::Js(format!(
            "{} returned a non-element value: {:?}",
            GROUPED_BAR_CHART, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_task_page_layout() {
        let json = serde_json::to_value(ChartOptions::default().with_width(812.0)).unwrap();
        assert_eq!(json["width"], 812.0);
        assert_eq!(json["height"], 500.0);
        assert_eq!(json["xLabel"], "Arguments →");
        assert_eq!(json["yLabel"], "Run Time (ms) ↑");
        assert_eq!(
            json["margin"],
            serde_json::json!({"top": 40.0, "right": 10.0, "bottom": 100.0, "left": 50.0})
        );
    }
}
