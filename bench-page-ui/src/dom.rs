//! Resolved handles on the task page's DOM.
//!
//! A task page identifies its task through the text of the title element
//! (`#entry-title`). The chart lives in the element whose id is that task name.
//! All lookups happen once, here, and fail with a `PageError` naming the element.

use crate::error::PageError;
use web_sys::{Document, Element, Window};

/// Id of the element whose text is the task name.
pub const TITLE_ELEMENT_ID: &str = "entry-title";

/// Suffix of the child element the chart panel is mounted into.
const PANEL_SUFFIX: &str = "-chart-panel";

/// The browser document of the current page.
pub fn document() -> Result<Document, PageError> {
    document_of(web_sys::window())
}

fn document_of(window: Option<Window>) -> Result<Document, PageError> {
    window
        .and_then(|w| w.document())
        .ok_or(PageError::NoDocument)
}

/// Look up an element by id, naming its `role` in the error when absent.
pub fn element_by_id(
    document: &Document,
    id: &str,
    role: &'static str,
) -> Result<Element, PageError> {
    find(|id| document.get_element_by_id(id), id, role)
}

fn find<E>(
    lookup: impl Fn(&str) -> Option<E>,
    id: &str,
    role: &'static str,
) -> Result<E, PageError> {
    lookup(id).ok_or_else(|| PageError::MissingElement {
        id: id.to_string(),
        role,
    })
}

/// The task name held by the title's text: trimmed, and never blank.
pub fn task_from_title(text: Option<String>) -> Result<String, PageError> {
    text.map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| PageError::EmptyTitle(TITLE_ELEMENT_ID.to_string()))
}

/// Resolve the task name and its container through `lookup`.
pub fn resolve_task<E>(
    lookup: impl Fn(&str) -> Option<E>,
    text_of: impl Fn(&E) -> Option<String>,
) -> Result<(String, E), PageError> {
    let title = find(&lookup, TITLE_ELEMENT_ID, "page title")?;
    let task = task_from_title(text_of(&title))?;
    let container = find(&lookup, &task, "task container")?;
    Ok((task, container))
}

/// Id of the chart panel mounted inside the task container.
pub fn panel_id(task: &str) -> String {
    format!("{}{}", task, PANEL_SUFFIX)
}

/// The task and its container element, resolved from the page.
#[derive(Clone)]
pub struct PageContext {
    pub document: Document,
    pub task: String,
    pub container: Element,
}

impl PageContext {
    /// Resolve the context of the current page.
    pub fn resolve() -> Result<Self, PageError> {
        Self::resolve_in(document()?)
    }

    pub fn resolve_in(document: Document) -> Result<Self, PageError> {
        let (task, container) =
            resolve_task(|id| document.get_element_by_id(id), |e: &Element| e.text_content())?;
        log::info!("page: bound to task `{}`", task);
        Ok(Self {
            document,
            task,
            container,
        })
    }

    /// Rendered width of the task container in pixels.
    pub fn container_width(&self) -> f64 {
        self.container.get_bounding_client_rect().width()
    }

    /// Id of the element the chart panel is mounted into, appending it to the
    /// container on first use so existing container content is left in place.
    pub fn mount_panel(&self) -> Result<String, PageError> {
        let id = panel_id(&self.task);
        if self.document.get_element_by_id(&id).is_none() {
            let panel = self.document.create_element("div")?;
            panel.set_id(&id);
            self.container.append_child(&panel)?;
        }
        Ok(id)
    }
}
