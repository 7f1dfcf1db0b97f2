/// Which top-level panel the page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Main,
    About,
}

/// Scrollable sections of the main panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Features,
    Download,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    ActivateFeatures,
    ActivateDownload,
    ToggleAbout,
}

/// Outcome of applying a `NavAction` to the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: ViewState,
    pub scroll: Option<Section>,
}

const ALL_SECTIONS: [Section; 2] = [Section::Features, Section::Download];

impl ViewState {
    pub fn toggled(self) -> Self {
        match self {
            ViewState::Main => ViewState::About,
            ViewState::About => ViewState::Main,
        }
    }

    pub fn transition(self, action: NavAction) -> Transition {
        let next = match action {
            NavAction::ToggleAbout => self.toggled(),
            NavAction::ActivateFeatures | NavAction::ActivateDownload => ViewState::Main,
        };
        Transition {
            next,
            scroll: action.scroll_section(),
        }
    }

    pub fn shows_section_links(self) -> bool {
        self == ViewState::Main
    }

    /// Sections the header links to while this view is active.
    pub fn section_links(self) -> &'static [Section] {
        if self.shows_section_links() {
            &ALL_SECTIONS
        } else {
            &[]
        }
    }
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Features => "Features",
            Section::Download => "Download",
        }
    }

    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::Download => "download",
        }
    }

    pub fn anchor_href(self) -> String {
        format!("#{}", self.anchor_id())
    }

    pub fn action(self) -> NavAction {
        match self {
            Section::Features => NavAction::ActivateFeatures,
            Section::Download => NavAction::ActivateDownload,
        }
    }
}

impl NavAction {
    pub fn scroll_section(self) -> Option<Section> {
        match self {
            NavAction::ActivateFeatures => Some(Section::Features),
            NavAction::ActivateDownload => Some(Section::Download),
            NavAction::ToggleAbout => None,
        }
    }
}
