use std::fmt;

/// The in-page anchors, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Element id used both as the scroll target and the DOM lookup key.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Scrolls to this section, as a nav control does when clicked.
    pub fn activate<S: Scroller>(self, scroller: &S) {
        smooth_scroll_to(scroller, self.anchor());
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Finds anchor elements and asks the platform to scroll them into view.
pub trait Scroller {
    type Target;

    fn find(&self, id: &str) -> Option<Self::Target>;

    /// Smooth scroll with the target aligned to the top of the viewport.
    fn scroll_into_view(&self, target: &Self::Target);
}

/// Missing anchors are a no-op.
pub fn smooth_scroll_to<S: Scroller>(scroller: &S, id: &str) {
    match scroller.find(id) {
        Some(target) => scroller.scroll_into_view(&target),
        None => log::debug!("no element with id `{id}`, skipping scroll"),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records scroll requests against a fixed set of element ids.
    #[derive(Default)]
    struct RecordingScroller {
        ids: Vec<String>,
        requests: RefCell<Vec<String>>,
    }

    impl RecordingScroller {
        fn with_sections() -> Self {
            Self {
                ids: SectionId::ALL.iter().map(|s| s.anchor().to_string()).collect(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Scroller for RecordingScroller {
        type Target = String;

        fn find(&self, id: &str) -> Option<String> {
            self.ids.iter().find(|i| *i == id).cloned()
        }

        fn scroll_into_view(&self, target: &String) {
            self.requests.borrow_mut().push(target.clone());
        }
    }

    #[test]
    fn test_each_control_scrolls_to_its_anchor() {
        for section in SectionId::ALL {
            let scroller = RecordingScroller::with_sections();
            section.activate(&scroller);
            assert_eq!(
                *scroller.requests.borrow(),
                vec![section.anchor().to_string()]
            );
        }
    }

    #[test]
    fn test_projects_control_targets_projects() {
        let scroller = RecordingScroller::with_sections();
        SectionId::Projects.activate(&scroller);
        assert_eq!(*scroller.requests.borrow(), vec!["projects".to_string()]);
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let scroller = RecordingScroller::with_sections();
        smooth_scroll_to(&scroller, "publications");
        assert!(scroller.requests.borrow().is_empty());

        let empty = RecordingScroller::default();
        SectionId::About.activate(&empty);
        assert!(empty.requests.borrow().is_empty());
    }

    #[test]
    fn test_repeated_requests_are_not_queued() {
        let scroller = RecordingScroller::with_sections();
        SectionId::Skills.activate(&scroller);
        SectionId::Contact.activate(&scroller);
        assert_eq!(
            *scroller.requests.borrow(),
            vec!["skills".to_string(), "contact".to_string()]
        );
    }

    #[test]
    fn test_from_anchor() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
            assert_eq!(section.to_string(), section.anchor());
        }
        assert_eq!(SectionId::from_anchor("blog"), None);
    }
}
