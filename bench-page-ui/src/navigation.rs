//! Marking the current task in the navigation sidebar.
//!
//! The sidebar lists tasks grouped by theme:
//!
//! ```text
//! <li>                              grandparent: theme entry
//!   <a>Theme</a>                    first link, marked active
//!   <ul class="collapsed">          parent, expanded
//!     <li id="<task>-nav">...</li>  marked active
//! ```

use crate::error::PageError;
use web_sys::Element;

pub const ACTIVE_CLASS: &str = "active";
pub const COLLAPSED_CLASS: &str = "collapsed";
pub const EXPANDED_CLASS: &str = "expanded";

/// Id of the navigation entry of `task`.
pub fn nav_id(task: &str) -> String {
    format!("{}-nav", task)
}

/// The element operations navigation activation needs.
pub trait NavElement: Sized {
    fn parent(&self) -> Option<Self>;
    /// First `<a>` descendant.
    fn first_link(&self) -> Option<Self>;
    fn add_class(&self, class: &str) -> Result<(), PageError>;
    /// Replace `from` by `to`; returns false when `from` was not present.
    fn replace_class(&self, from: &str, to: &str) -> Result<bool, PageError>;
}

impl NavElement for Element {
    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }

    fn first_link(&self) -> Option<Self> {
        self.get_elements_by_tag_name("a").item(0)
    }

    fn add_class(&self, class: &str) -> Result<(), PageError> {
        self.class_list().add_1(class)?;
        Ok(())
    }

    fn replace_class(&self, from: &str, to: &str) -> Result<bool, PageError> {
        Ok(self.class_list().replace(from, to)?)
    }
}

/// Activate the entry `nav` (whose id is `id`), its theme link, and expand its list.
pub fn activate_navigation<E: NavElement>(nav: &E, id: &str) -> Result<(), PageError> {
    let missing = |what: &'static str| PageError::MissingAncestor {
        id: id.to_string(),
        what,
    };

    nav.add_class(ACTIVE_CLASS)?;

    let parent = nav.parent().ok_or_else(|| missing("parent"))?;
    let grandparent = parent.parent().ok_or_else(|| missing("grandparent"))?;
    let link = grandparent
        .first_link()
        .ok_or_else(|| missing("theme link"))?;
    link.add_class(ACTIVE_CLASS)?;

    if !parent.replace_class(COLLAPSED_CLASS, EXPANDED_CLASS)? {
        log::debug!("navigation: `{}` list was not collapsed", id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Node {
        classes: Vec<String>,
        parent: Option<FakeElement>,
        links: Vec<FakeElement>,
    }

    #[derive(Clone, Default)]
    struct FakeElement(Rc<RefCell<Node>>);

    impl FakeElement {
        fn with_classes(classes: &[&str]) -> Self {
            let element = Self::default();
            element.0.borrow_mut().classes = classes.iter().map(|c| c.to_string()).collect();
            element
        }

        fn child_of(self, parent: &FakeElement) -> Self {
            self.0.borrow_mut().parent = Some(parent.clone());
            self
        }

        fn classes(&self) -> Vec<String> {
            self.0.borrow().classes.clone()
        }
    }

    impl NavElement for FakeElement {
        fn parent(&self) -> Option<Self> {
            self.0.borrow().parent.clone()
        }

        fn first_link(&self) -> Option<Self> {
            self.0.borrow().links.first().cloned()
        }

        fn add_class(&self, class: &str) -> Result<(), PageError> {
            let mut node = self.0.borrow_mut();
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
            Ok(())
        }

        fn replace_class(&self, from: &str, to: &str) -> Result<bool, PageError> {
            let mut node = self.0.borrow_mut();
            match node.classes.iter().position(|c| c == from) {
                Some(i) => {
                    node.classes[i] = to.to_string();
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    /// theme `<li>` > (`<a>`, `<ul class="collapsed">` > `<li id=task-nav>`)
    fn sidebar() -> (FakeElement, FakeElement, FakeElement, FakeElement) {
        let theme = FakeElement::default();
        let link = FakeElement::default().child_of(&theme);
        theme.0.borrow_mut().links.push(link.clone());
        let list = FakeElement::with_classes(&["nav-list", "collapsed"]).child_of(&theme);
        let entry = FakeElement::default().child_of(&list);
        (theme, link, list, entry)
    }

    #[test]
    fn activates_entry_link_and_expands_list() {
        let (_theme, link, list, entry) = sidebar();
        activate_navigation(&entry, "inference-nav").unwrap();
        assert_eq!(entry.classes(), ["active"]);
        assert_eq!(link.classes(), ["active"]);
        assert_eq!(list.classes(), ["nav-list", "expanded"]);
    }

    #[test]
    fn already_expanded_list_is_left_alone() {
        let (_theme, _link, list, entry) = sidebar();
        list.0.borrow_mut().classes = vec!["expanded".to_string()];
        activate_navigation(&entry, "inference-nav").unwrap();
        assert_eq!(list.classes(), ["expanded"]);
    }

    #[test]
    fn missing_grandparent_is_reported() {
        let list = FakeElement::default();
        let entry = FakeElement::default().child_of(&list);
        let err = activate_navigation(&entry, "inference-nav").unwrap_err();
        assert_eq!(err.to_string(), "navigation entry `inference-nav` has no grandparent");
    }

    #[test]
    fn missing_theme_link_is_reported() {
        let theme = FakeElement::default();
        let list = FakeElement::default().child_of(&theme);
        let entry = FakeElement::default().child_of(&list);
        let err = activate_navigation(&entry, "inference-nav").unwrap_err();
        assert!(matches!(err, PageError::MissingAncestor { what: "theme link", .. }));
    }

    #[test]
    fn nav_id_appends_suffix() {
        assert_eq!(nav_id("inference"), "inference-nav");
    }
}
