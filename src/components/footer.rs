use yew::prelude::*;

use crate::config;

pub const FOOTER_LINKS: [&str; 2] = ["Terms of Service", "Privacy"];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p class="copyright">
                    { format!("© {} {}. All rights reserved.", config::COPYRIGHT_YEAR, config::APP_NAME) }
                </p>
                <nav class="footer-links">
                    { for FOOTER_LINKS.iter().map(|label| html! {
                        // Placeholders until the legal pages exist.
                        <a class="footer-link" href="#">{ *label }</a>
                    }) }
                </nav>
            </div>
        </footer>
    }
}
