//! The one-shot task page load sequence.
//!
//! 1. Load the task's records from the injected `DatasetSource`.
//! 2. Order them per the `SortPolicy`.
//! 3. Derive the library set.
//! 4. Resolve each library's code block.
//! 5. Build the chart through the factory, sized to the task container.
//! 6. Hide every code block (an empty selection).
//! 7. Append the chart to its host element.
//! 8. Activate the task's navigation entry.
//!
//! Each step fails fast with a `BindError`; later steps do not run.

use crate::dom::{self, PageContext};
use crate::error::{BindError, BindStep, PageError};
use crate::js_bridge::{self, ChartOptions};
use crate::navigation::{self, NavElement};
use crate::visibility::{toggle_visibility, DisplayTarget, LibraryPanels};
use bench_data::{dataset, DataRecord, DatasetSource, LibrarySet, SortPolicy};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// A dataset ready to chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPage {
    pub records: Vec<DataRecord>,
    pub libraries: LibrarySet,
    /// Whether the records were reordered by run time.
    pub sorted: bool,
}

/// The page operations the load sequence runs against.
pub trait TaskPage {
    type Block: DisplayTarget + 'static;
    type Nav: NavElement;
    type Chart;

    fn task(&self) -> &str;
    fn container_width(&self) -> f64;
    /// The code block of `library`, if the page has one.
    fn code_block(&self, library: &str) -> Option<Self::Block>;
    fn build_chart(
        &self,
        records: &[DataRecord],
        options: &ChartOptions,
        on_activate: Box<dyn FnMut(Vec<String>)>,
    ) -> Result<Self::Chart, PageError>;
    fn append_chart(&self, chart: Self::Chart) -> Result<(), PageError>;
    fn nav_entry(&self, id: &str) -> Result<Self::Nav, PageError>;
}

/// The live page: its resolved context and the element the chart goes into.
pub struct BrowserPage {
    pub context: PageContext,
    pub chart_host: Element,
}

impl TaskPage for BrowserPage {
    type Block = HtmlElement;
    type Nav = Element;
    type Chart = Element;

    fn task(&self) -> &str {
        &self.context.task
    }

    fn container_width(&self) -> f64 {
        self.context.container_width()
    }

    fn code_block(&self, library: &str) -> Option<HtmlElement> {
        self.context
            .document
            .get_element_by_id(library)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }

    fn build_chart(
        &self,
        records: &[DataRecord],
        options: &ChartOptions,
        on_activate: Box<dyn FnMut(Vec<String>)>,
    ) -> Result<Element, PageError> {
        js_bridge::render_grouped_bar_chart(records, options, on_activate)
    }

    fn append_chart(&self, chart: Element) -> Result<(), PageError> {
        self.chart_host.append_child(&chart)?;
        Ok(())
    }

    fn nav_entry(&self, id: &str) -> Result<Element, PageError> {
        dom::element_by_id(&self.context.document, id, "navigation entry")
    }
}

pub struct PageBinder<S> {
    source: S,
    sort_policy: SortPolicy,
}

impl<S: DatasetSource> PageBinder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            sort_policy: SortPolicy::default(),
        }
    }

    pub fn with_sort_policy(mut self, policy: SortPolicy) -> Self {
        self.sort_policy = policy;
        self
    }

    /// Load, order and summarize the dataset.
    pub fn prepare(&self) -> Result<PreparedPage, PageError> {
        let mut records = self.source.load()?;
        let sorted = dataset::prepare_dataset(&mut records, self.sort_policy);
        let libraries = LibrarySet::from_records(&records);
        log::info!(
            "binder: {} records across {} libraries",
            records.len(),
            libraries.len()
        );
        Ok(PreparedPage {
            records,
            libraries,
            sorted,
        })
    }

    /// Run the full load sequence against `page` and return the library set.
    ///
    /// Every later chart selection toggles the code blocks inside the chart's
    /// callback, then is passed to `on_select`.
    pub fn bind<P: TaskPage>(
        &self,
        page: &P,
        on_select: impl FnMut(&[String]) + 'static,
    ) -> Result<LibrarySet, BindError> {
        let prepared = self.prepare().map_err(|e| e.during(BindStep::Dataset))?;
        let panels = Rc::new(LibraryPanels::new(&prepared.libraries, |name| {
            page.code_block(name)
        }));

        let options = ChartOptions::default().with_width(page.container_width());
        let chart = page
            .build_chart(
                &prepared.records,
                &options,
                Box::new(activation_handler(Rc::clone(&panels), on_select)),
            )
            .map_err(|e| e.during(BindStep::Chart))?;

        toggle_visibility(&panels, &[]);
        page.append_chart(chart).map_err(|e| e.during(BindStep::Mount))?;

        let id = navigation::nav_id(page.task());
        page.nav_entry(&id)
            .and_then(|nav| navigation::activate_navigation(&nav, &id))
            .map_err(|e| e.during(BindStep::Navigation))?;

        Ok(prepared.libraries)
    }
}

/// The chart's activation callback: the blocks are toggled before it returns.
fn activation_handler<T: DisplayTarget>(
    panels: Rc<LibraryPanels<T>>,
    mut on_select: impl FnMut(&[String]),
) -> impl FnMut(Vec<String>) {
    move |selected| {
        toggle_visibility(&panels, &selected);
        on_select(&selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bench_data::{DatasetError, JsonDataset};
    use std::cell::RefCell;

    type Log = Rc<RefCell<Vec<String>>>;

    const TWO_LIBRARIES: &str = r#"[{"arguments": "x", "runTime": 5, "libraryName": "A"},
                                    {"arguments": "y", "runTime": 2, "libraryName": "B"}]"#;

    struct FakeBlock {
        name: String,
        log: Log,
    }

    impl DisplayTarget for FakeBlock {
        fn set_displayed(&self, displayed: bool) -> Result<(), PageError> {
            let display = if displayed { "block" } else { "none" };
            self.log.borrow_mut().push(format!("{}: {}", self.name, display));
            Ok(())
        }
    }

    /// entry > list > theme, with the theme's first link
    struct FakeNav {
        name: &'static str,
        log: Log,
    }

    impl NavElement for FakeNav {
        fn parent(&self) -> Option<Self> {
            let name = match self.name {
                "entry" => "list",
                "list" => "theme",
                _ => return None,
            };
            Some(FakeNav { name, log: self.log.clone() })
        }

        fn first_link(&self) -> Option<Self> {
            (self.name == "theme").then(|| FakeNav { name: "link", log: self.log.clone() })
        }

        fn add_class(&self, class: &str) -> Result<(), PageError> {
            self.log.borrow_mut().push(format!("{} +{}", self.name, class));
            Ok(())
        }

        fn replace_class(&self, from: &str, to: &str) -> Result<bool, PageError> {
            self.log.borrow_mut().push(format!("{} {}->{}", self.name, from, to));
            Ok(true)
        }
    }

    #[derive(Default)]
    struct FakePage {
        log: Log,
        blocks: Vec<&'static str>,
        chart_fails: bool,
        nav_missing: bool,
        on_activate: RefCell<Option<Box<dyn FnMut(Vec<String>)>>>,
    }

    impl FakePage {
        fn with_blocks(blocks: &[&'static str]) -> Self {
            Self {
                blocks: blocks.to_vec(),
                ..Self::default()
            }
        }

        fn events(&self) -> Vec<String> {
            self.log.borrow().clone()
        }

        fn activate(&self, selected: &[&str]) {
            let mut callback = self.on_activate.borrow_mut();
            let callback = callback.as_mut().expect("chart was built");
            callback(selected.iter().map(|s| s.to_string()).collect());
        }
    }

    impl TaskPage for FakePage {
        type Block = FakeBlock;
        type Nav = FakeNav;
        type Chart = usize;

        fn task(&self) -> &str {
            "inference"
        }

        fn container_width(&self) -> f64 {
            800.0
        }

        fn code_block(&self, library: &str) -> Option<FakeBlock> {
            self.blocks.contains(&library).then(|| FakeBlock {
                name: library.to_string(),
                log: self.log.clone(),
            })
        }

        fn build_chart(
            &self,
            records: &[DataRecord],
            options: &ChartOptions,
            on_activate: Box<dyn FnMut(Vec<String>)>,
        ) -> Result<usize, PageError> {
            if self.chart_fails {
                return Err(PageError::ChartFactoryMissing(js_bridge::GROUPED_BAR_CHART));
            }
            self.log
                .borrow_mut()
                .push(format!("chart of {} at {}px", records.len(), options.width));
            *self.on_activate.borrow_mut() = Some(on_activate);
            Ok(records.len())
        }

        fn append_chart(&self, chart: usize) -> Result<(), PageError> {
            self.log.borrow_mut().push(format!("append chart of {}", chart));
            Ok(())
        }

        fn nav_entry(&self, id: &str) -> Result<FakeNav, PageError> {
            if self.nav_missing {
                return Err(PageError::MissingElement {
                    id: id.to_string(),
                    role: "navigation entry",
                });
            }
            self.log.borrow_mut().push(format!("nav {}", id));
            Ok(FakeNav { name: "entry", log: self.log.clone() })
        }
    }

    fn binder(json: &'static str) -> PageBinder<JsonDataset> {
        PageBinder::new(JsonDataset::new(json))
    }

    #[test]
    fn prepare_sorts_textual_arguments() {
        let page = binder(TWO_LIBRARIES).prepare().unwrap();
        assert!(page.sorted);
        assert_eq!(page.records[0].library_name, "B");
        assert_eq!(page.libraries.as_slice(), ["B", "A"]);
    }

    #[test]
    fn prepare_keeps_numeric_arguments_in_order() {
        let binder = binder(
            r#"[{"arguments": 1, "runTime": 5, "libraryName": "A"},
                {"arguments": 2, "runTime": 2, "libraryName": "B"}]"#,
        );
        let page = binder.prepare().unwrap();
        assert!(!page.sorted);
        assert_eq!(page.records[0].library_name, "A");
        assert_eq!(page.libraries.as_slice(), ["A", "B"]);
    }

    #[test]
    fn prepare_honours_explicit_policy() {
        let binder = binder(
            r#"[{"arguments": 1, "runTime": 5, "libraryName": "A"},
                {"arguments": 2, "runTime": 2, "libraryName": "B"}]"#,
        )
        .with_sort_policy(SortPolicy::Always);
        let page = binder.prepare().unwrap();
        assert_eq!(page.records[0].library_name, "B");
    }

    #[test]
    fn prepare_rejects_empty_dataset() {
        let err = binder("[]").prepare().unwrap_err();
        assert!(matches!(err, PageError::Dataset(DatasetError::Empty)));
    }

    #[test]
    fn bind_runs_the_load_sequence_in_order() {
        let page = FakePage::with_blocks(&["A", "B"]);
        let libraries = binder(TWO_LIBRARIES).bind(&page, |_| {}).unwrap();

        assert_eq!(libraries.as_slice(), ["B", "A"]);
        assert_eq!(
            page.events(),
            [
                "chart of 2 at 800px",
                "B: none",
                "A: none",
                "append chart of 2",
                "nav inference-nav",
                "entry +active",
                "link +active",
                "list collapsed->expanded",
            ]
        );
    }

    #[test]
    fn activation_toggles_blocks_before_returning() {
        let page = FakePage::with_blocks(&["A", "B"]);
        let log = page.log.clone();
        binder(TWO_LIBRARIES)
            .bind(&page, move |selected| {
                log.borrow_mut().push(format!("selected {}", selected.join(",")));
            })
            .unwrap();
        page.log.borrow_mut().clear();

        page.activate(&["A"]);
        assert_eq!(page.events(), ["B: none", "A: block", "selected A"]);

        page.activate(&[]);
        assert_eq!(page.events()[3..], ["B: none", "A: none", "selected "]);
    }

    #[test]
    fn missing_code_blocks_are_skipped_on_activation() {
        let page = FakePage::with_blocks(&["A"]);
        binder(TWO_LIBRARIES).bind(&page, |_| {}).unwrap();
        page.log.borrow_mut().clear();

        page.activate(&["A", "B"]);
        assert_eq!(page.events(), ["A: block"]);
    }

    #[test]
    fn empty_dataset_stops_before_the_chart() {
        let page = FakePage::with_blocks(&["A", "B"]);
        let err = binder("[]").bind(&page, |_| {}).unwrap_err();
        assert_eq!(err.step, BindStep::Dataset);
        assert!(page.events().is_empty());
    }

    #[test]
    fn chart_failure_leaves_the_page_untouched() {
        let page = FakePage {
            chart_fails: true,
            ..FakePage::with_blocks(&["A", "B"])
        };
        let err = binder(TWO_LIBRARIES).bind(&page, |_| {}).unwrap_err();
        assert_eq!(err.step, BindStep::Chart);
        assert!(page.events().is_empty());
    }

    #[test]
    fn missing_navigation_entry_is_the_last_step() {
        let page = FakePage {
            nav_missing: true,
            ..FakePage::with_blocks(&["A", "B"])
        };
        let err = binder(TWO_LIBRARIES).bind(&page, |_| {}).unwrap_err();
        assert_eq!(err.step, BindStep::Navigation);
        assert_eq!(
            err.to_string(),
            "activating navigation: missing navigation entry element with id `inference-nav`"
        );
        assert_eq!(page.events().last().map(String::as_str), Some("append chart of 2"));
    }
}
