use crate::config;
use crate::error::NavigationError;
use crate::utils::navigate::Navigate;

/// Platforms offered in the download call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadTarget {
    Android,
    Ios,
}

impl DownloadTarget {
    pub fn label(self) -> &'static str {
        match self {
            DownloadTarget::Android => "Download for Android",
            DownloadTarget::Ios => "Download for iOS",
        }
    }

    pub fn href(self) -> Option<&'static str> {
        match self {
            DownloadTarget::Android => Some(config::get_release_url()),
            // No iOS build is published.
            DownloadTarget::Ios => None,
        }
    }

    pub fn is_available(self) -> bool {
        self.href().is_some()
    }
}

/// Sends the browser to the target's artifact.
///
/// Returns `Ok(false)` without navigating when the platform has no build.
pub fn follow<N: Navigate>(target: DownloadTarget, navigator: &N) -> Result<bool, NavigationError> {
    match target.href() {
        Some(url) => {
            log::info!("navigating to {} release: {}", target.label(), url);
            navigator.navigate(url)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
