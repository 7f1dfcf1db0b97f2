//! Build-time site settings.

pub const APP_NAME: &str = "Remind Me";
pub const COPYRIGHT_YEAR: u16 = 2024;
pub const SUPPORT_EMAIL: &str = "support@remindme.com";
pub const POSTAL_ADDRESS: &str = "123 App Street, Tech City, TC 12345";

const DEFAULT_RELEASE_URL: &str =
    "https://github.com/biplabroy-1/remind-me-v4/releases/download/last_test/app-arm64-v8a-release.apk";

/// Android release artifact the download buttons point at.
///
/// Set `REMIND_ME_RELEASE_URL` when building to ship a different artifact.
pub fn get_release_url() -> &'static str {
    match option_env!("REMIND_ME_RELEASE_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_RELEASE_URL,
    }
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn release_url_defaults_to_android_apk() {
        if option_env!("REMIND_ME_RELEASE_URL").map_or(true, |url| url.trim().is_empty()) {
            assert_eq!(
                get_release_url(),
                "https://github.com/biplabroy-1/remind-me-v4/releases/download/last_test/app-arm64-v8a-release.apk"
            );
        }
        assert!(get_release_url().starts_with("https://"));
    }

    #[test]
    fn log_level_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        assert_eq!(log_level(), expected);
    }
}
