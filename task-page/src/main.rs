//! Benchmark task page
//!
//! Binds a statically generated task page: charts the task's preloaded
//! records as a grouped bar chart and shows the code block of each library
//! the user selects in the chart.
//!
//! Flow:
//! 1. Before launch: resolve the task from `#entry-title` and mount a chart
//!    panel inside the task's container.
//! 2. On mount: run the page binder (dataset, chart, initial toggle, navigation).
//! 3. On every chart selection: the activation callback toggles the code blocks
//!    before returning, then forwards the selection over a channel into
//!    `PageState::selected` for the summary line.

use bench_page_ui::components::{ChartContainer, ErrorDisplay, SelectionSummary};
use bench_page_ui::dom::{self, PageContext};
use bench_page_ui::global_dataset::GlobalDataset;
use bench_page_ui::state::PageState;
use bench_page_ui::{BindStep, BrowserPage, PageBinder};
use dioxus::prelude::*;
use futures_util::StreamExt;

/// DOM id of the div the chart is appended to.
const CHART_HOST_ID: &str = "task-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let mount = match PageContext::resolve().and_then(|context| context.mount_panel()) {
        Ok(id) => id,
        Err(e) => {
            log::error!("task page not bound: {}", e);
            return;
        }
    };

    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(mount))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(PageState::new);
    let task = use_hook(|| PageContext::resolve().map(|c| c.task).unwrap_or_default());

    // Selections arrive from the chart callback; they only feed the summary.
    let selection = use_coroutine(move |mut rx: UnboundedReceiver<Vec<String>>| async move {
        while let Some(selected) = rx.next().await {
            state.selected.set(selected);
        }
    });

    // ─── Effect: bind the page once on mount ───
    use_effect(move || {
        let tx = selection.tx();
        let binder = PageBinder::new(GlobalDataset::default());

        let bound = PageContext::resolve()
            .and_then(|context| {
                let chart_host =
                    dom::element_by_id(&context.document, CHART_HOST_ID, "chart host")?;
                Ok(BrowserPage {
                    context,
                    chart_host,
                })
            })
            .map_err(|e| e.during(BindStep::Resolve))
            .and_then(|page| {
                binder.bind(&page, move |selected: &[String]| {
                    if tx.unbounded_send(selected.to_vec()).is_err() {
                        log::warn!("task page: selection not summarized, panel is gone");
                    }
                })
            });

        match bound {
            Ok(libraries) => {
                state
                    .libraries
                    .set(libraries.iter().map(str::to_string).collect());
                state.error.set(None);
            }
            Err(e) => {
                log::error!("task page not bound: {}", e);
                state.error.set(Some((e.step, e.error.to_string())));
            }
        }
        state.loading.set(false);
    });

    // ─── Render ───
    rsx! {
        div {
            style: "font-family: system-ui, -apple-system, sans-serif;",

            if let Some((step, message)) = state.error.read().as_ref() {
                ErrorDisplay { step: *step, message: message.clone() }
            }

            ChartContainer {
                host_id: CHART_HOST_ID.to_string(),
                task: task.clone(),
                loading: *state.loading.read(),
            }

            if !*state.loading.read() && state.error.read().is_none() {
                SelectionSummary {}
            }
        }
    }
}
