use crate::error::NavigationError;

/// Full-page navigation to an outbound URL.
#[cfg_attr(test, mockall::automock)]
pub trait Navigate {
    fn navigate(&self, url: &str) -> Result<(), NavigationError>;
}

/// Navigates the current tab by assigning `window.location.href`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserLocation;

impl Navigate for BrowserLocation {
    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::NoWindow)?;
        window.location().set_href(url)?;
        Ok(())
    }
}
