use yew::prelude::*;

use crate::components::button::{Button, ButtonSize};
use crate::config;
use crate::view_state::{NavAction, Section, ViewState};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub view: ViewState,
    pub on_action: Callback<NavAction>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let section_link = |section: Section| {
        let on_action = props.on_action.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(section.action());
        });
        html! {
            <a class="nav-link" href={section.anchor_href()} onclick={onclick}>
                { section.label() }
                <span class="nav-underline"></span>
            </a>
        }
    };

    let toggle_about = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(NavAction::ToggleAbout))
    };

    html! {
        <header class="site-header">
            <div class="header-inner">
                <p class="logo">
                    <i class="fas fa-mobile-screen-button"></i>
                    <span class="logo-text">{ config::APP_NAME }</span>
                </p>
                <nav class="site-nav">
                    { for props.view.section_links().iter().copied().map(section_link) }
                    <Button size={ButtonSize::Lg} onclick={toggle_about}>
                        { "About Us" }
                    </Button>
                </nav>
            </div>
        </header>
    }
}
