use crate::utils::scroll::{ScrollTarget, ScrollTargets};
use crate::view_state::{NavAction, ViewState};

/// Navigation logic of the page, independent of any rendering.
///
/// The view flips first and the scroll request goes to whatever target is
/// mounted at that moment. Coming from the About panel the section is not
/// mounted yet, so the scroll quietly does nothing.
#[derive(Debug)]
pub struct PageShell<T> {
    view: ViewState,
    targets: ScrollTargets<T>,
}

impl<T: ScrollTarget> PageShell<T> {
    pub fn new(view: ViewState, targets: ScrollTargets<T>) -> Self {
        Self { view, targets }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn activate_features(&mut self) {
        self.dispatch(NavAction::ActivateFeatures);
    }

    pub fn activate_download(&mut self) {
        self.dispatch(NavAction::ActivateDownload);
    }

    pub fn toggle_about(&mut self) {
        self.dispatch(NavAction::ToggleAbout);
    }

    pub fn dispatch(&mut self, action: NavAction) {
        let transition = self.view.transition(action);
        log::debug!("{:?}: {:?} -> {:?}", action, self.view, transition.next);
        self.view = transition.next;

        if let Some(section) = transition.scroll {
            self.targets.scroll_to(section);
        }
    }
}

/// Runs one click through a shell seeded with `view` and returns the view to store.
pub fn next_view<T: ScrollTarget>(view: ViewState, targets: ScrollTargets<T>, action: NavAction) -> ViewState {
    let mut shell = PageShell::new(view, targets);
    shell.dispatch(action);
    shell.view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::scroll::MockScrollTarget;
    use pretty_assertions::assert_eq;

    fn target(mounted: bool, calls: usize) -> MockScrollTarget {
        let mut target = MockScrollTarget::new();
        target
            .expect_scroll_into_view()
            .times(calls)
            .return_const(mounted);
        target
    }

    fn idle_targets() -> ScrollTargets<MockScrollTarget> {
        ScrollTargets {
            features: target(true, 0),
            download: target(true, 0),
        }
    }

    #[test]
    fn toggle_about_from_main_shows_about_and_hides_links() {
        let mut shell = PageShell::new(ViewState::Main, idle_targets());
        shell.toggle_about();

        assert_eq!(shell.view(), ViewState::About);
        assert!(shell.view().section_links().is_empty());
    }

    #[test]
    fn toggle_about_twice_returns_to_main() {
        let mut shell = PageShell::new(ViewState::Main, idle_targets());
        shell.toggle_about();
        shell.toggle_about();

        assert_eq!(shell.view(), ViewState::Main);
    }

    #[test]
    fn activate_features_from_about_returns_to_main_and_requests_scroll() {
        let targets = ScrollTargets {
            // The features section is unmounted while About is showing.
            features: target(false, 1),
            download: target(true, 0),
        };
        let mut shell = PageShell::new(ViewState::About, targets);
        shell.activate_features();

        assert_eq!(shell.view(), ViewState::Main);
    }

    #[test]
    fn activate_features_on_main_scrolls() {
        let targets = ScrollTargets {
            features: target(true, 1),
            download: target(true, 0),
        };
        let mut shell = PageShell::new(ViewState::Main, targets);
        shell.activate_features();

        assert_eq!(shell.view(), ViewState::Main);
    }

    #[test]
    fn activate_download_scrolls_download_section() {
        let targets = ScrollTargets {
            features: target(true, 0),
            download: target(true, 2),
        };
        let mut shell = PageShell::new(ViewState::About, targets);
        shell.activate_download();
        shell.activate_download();

        assert_eq!(shell.view(), ViewState::Main);
    }

    #[test]
    fn next_view_reports_the_toggled_view() {
        assert_eq!(
            next_view(ViewState::Main, idle_targets(), NavAction::ToggleAbout),
            ViewState::About
        );
        assert_eq!(
            next_view(ViewState::About, idle_targets(), NavAction::ToggleAbout),
            ViewState::Main
        );
    }

    #[test]
    fn next_view_leaves_about_and_requests_scroll() {
        let targets = ScrollTargets {
            features: target(true, 0),
            download: target(false, 1),
        };
        assert_eq!(
            next_view(ViewState::About, targets, NavAction::ActivateDownload),
            ViewState::Main
        );
    }
}
