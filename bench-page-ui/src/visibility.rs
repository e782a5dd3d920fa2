//! Showing the code block of each selected library.
//!
//! Every library in a task's dataset has a code block on the page whose id is
//! the library name. Selecting libraries in the chart shows their blocks and
//! hides all others.

use crate::error::PageError;
use bench_data::LibrarySet;
use log::{debug, warn};
use web_sys::HtmlElement;

/// Something whose display can be switched on and off.
pub trait DisplayTarget {
    fn set_displayed(&self, displayed: bool) -> Result<(), PageError>;
}

impl DisplayTarget for HtmlElement {
    fn set_displayed(&self, displayed: bool) -> Result<(), PageError> {
        let value = if displayed { "block" } else { "none" };
        self.style().set_property("display", value)?;
        Ok(())
    }
}

/// The code block of each library, resolved once per page load.
///
/// Libraries without a block are kept (as `None`) so they still count as known.
pub struct LibraryPanels<T> {
    panels: Vec<(String, Option<T>)>,
}

impl<T: DisplayTarget> LibraryPanels<T> {
    /// Resolve each library's block through `lookup`.
    pub fn new(libraries: &LibrarySet, mut lookup: impl FnMut(&str) -> Option<T>) -> Self {
        let panels = libraries
            .iter()
            .map(|name| {
                let panel = lookup(name);
                if panel.is_none() {
                    warn!("visibility: no code block with id `{}`; it will not be toggled", name);
                }
                (name.to_string(), panel)
            })
            .collect();
        Self { panels }
    }
}

/// Show the blocks of `active` libraries and hide every other known block.
///
/// Missing blocks and styling failures are skipped. Returns how many blocks are shown.
pub fn toggle_visibility<T: DisplayTarget>(panels: &LibraryPanels<T>, active: &[String]) -> usize {
    let mut shown = 0;
    for (name, panel) in &panels.panels {
        let Some(panel) = panel else {
            continue;
        };
        let displayed = active.iter().any(|a| a == name);
        match panel.set_displayed(displayed) {
            Ok(()) if displayed => shown += 1,
            Ok(()) => {}
            Err(e) => warn!("visibility: could not style `{}`: {}", name, e),
        }
    }
    debug!("visibility: {} of {} blocks shown", shown, panels.panels.len());
    shown
}
