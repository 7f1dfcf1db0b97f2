pub mod components;
pub mod config;
pub mod download;
pub mod error;
pub mod pages;
pub mod shell;
pub mod utils;
pub mod view_state;

use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::about::AboutUs;
use crate::pages::landing::Landing;
use crate::utils::scroll::ScrollTargets;
use crate::view_state::{NavAction, ViewState};

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub initial_view: ViewState,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let initial_view = props.initial_view;
    let view = use_state(move || initial_view);
    let features_ref = use_node_ref();
    let download_ref = use_node_ref();

    let on_action = {
        let view = view.clone();
        let targets = ScrollTargets {
            features: features_ref.clone(),
            download: download_ref.clone(),
        };
        Callback::from(move |action: NavAction| {
            view.set(shell::next_view(*view, targets.clone(), action));
        })
    };

    // Keyed so the enter animation replays whenever the panel swaps.
    let panel = match *view {
        ViewState::Main => html! {
            <Landing
                key="main-content"
                features_ref={features_ref.clone()}
                download_ref={download_ref.clone()}
            />
        },
        ViewState::About => html! { <AboutUs key="about-us" /> },
    };

    html! {
        <div class="page">
            <Header view={*view} on_action={on_action} />
            <main class="page-main">
                { panel }
            </main>
            <Footer />
        </div>
    }
}
