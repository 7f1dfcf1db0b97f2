use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::NodeRef;

use crate::view_state::Section;

/// Something the viewport can be asked to bring into view.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollTarget {
    /// Returns `false` when there was nothing to scroll to.
    fn scroll_into_view(&self) -> bool;
}

impl ScrollTarget for NodeRef {
    fn scroll_into_view(&self) -> bool {
        match self.cast::<Element>() {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => {
                log::debug!("scroll target not mounted, skipping scroll");
                false
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollTargets<T> {
    pub features: T,
    pub download: T,
}

impl<T: ScrollTarget> ScrollTargets<T> {
    pub fn get(&self, section: Section) -> &T {
        match section {
            Section::Features => &self.features,
            Section::Download => &self.download,
        }
    }

    pub fn scroll_to(&self, section: Section) -> bool {
        self.get(section).scroll_into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(mounted: bool, calls: usize) -> MockScrollTarget {
        let mut target = MockScrollTarget::new();
        target
            .expect_scroll_into_view()
            .times(calls)
            .return_const(mounted);
        target
    }

    #[test]
    fn scrolls_only_the_requested_section() {
        let targets = ScrollTargets {
            features: target(true, 1),
            download: target(true, 0),
        };
        assert!(targets.scroll_to(Section::Features));
    }

    #[test]
    fn unmounted_target_reports_no_scroll() {
        let targets = ScrollTargets {
            features: target(true, 0),
            download: target(false, 1),
        };
        assert!(!targets.scroll_to(Section::Download));
    }

    #[test]
    fn detached_node_ref_is_skipped() {
        assert!(!NodeRef::default().scroll_into_view());
    }
}
