use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::download::{follow, DownloadTarget};
use crate::utils::navigate::BrowserLocation;
use crate::view_state::Section;

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        icon: "fa-calendar",
        title: "Class Schedule Overview",
        description: "View your schedule in daily and weekly formats for better planning.",
    },
    Feature {
        icon: "fa-bell",
        title: "Class Reminders & Notifications",
        description: "Never miss a class with timely reminders and notifications.",
    },
    Feature {
        icon: "fa-filter",
        title: "Class Grouping & Filtering",
        description: "Organize and filter your classes for easy management.",
    },
    Feature {
        icon: "fa-wifi",
        title: "Offline Access",
        description: "Sync your schedule locally for offline viewing anytime, anywhere.",
    },
    Feature {
        icon: "fa-clock",
        title: "Customizable Alarms",
        description: "Set up alarms that automatically activate based on class start times.",
    },
    Feature {
        icon: "fa-volume-high",
        title: "Personalized Notifications",
        description: "Customize sound and vibration patterns for class start reminders.",
    },
];

/// Platform behind the hero's "Download Now" button.
pub const HERO_DOWNLOAD: DownloadTarget = DownloadTarget::Android;

fn download_callback(target: DownloadTarget) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        if let Err(err) = follow(target, &BrowserLocation) {
            log::error!("{} failed: {}", target.label(), err);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub features_ref: NodeRef,
    pub download_ref: NodeRef,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    html! {
        <div class="panel main-content">
            <section class="hero">
                <div class="container hero-inner">
                    <div class="hero-text">
                        <h1 class="hero-title">{ "Experience the Future of Class Scheduling" }</h1>
                        <p class="hero-subtitle">
                            { "Download our revolutionary app and transform the way you manage \
                               your class schedule. Sleek, powerful, and intuitive." }
                        </p>
                        <div class="cta-group">
                            <Button size={ButtonSize::Lg} onclick={download_callback(HERO_DOWNLOAD)}>
                                { "Download Now" }
                                <i class="fas fa-download btn-icon"></i>
                            </Button>
                            <Button size={ButtonSize::Lg} variant={ButtonVariant::Outline}>
                                { "Learn More" }
                                <i class="fas fa-arrow-right btn-icon"></i>
                            </Button>
                        </div>
                    </div>
                    <div class="phone-frame">
                        <div class="phone-screen">
                            <img src="assets/screenshot.png" alt="App Screenshot" />
                        </div>
                    </div>
                </div>
            </section>

            <section id={Section::Features.anchor_id()} ref={props.features_ref.clone()} class="features">
                <div class="container">
                    <h2 class="section-title">{ "Our App Features" }</h2>
                    <div class="feature-grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <div class="feature-icon">
                                    <i class={classes!("fas", feature.icon)}></i>
                                </div>
                                <h3>{ feature.title }</h3>
                                <p>{ feature.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Download.anchor_id()} ref={props.download_ref.clone()} class="download">
                <div class="container download-inner">
                    <h2 class="section-title">{ "Ready to Get Started?" }</h2>
                    <p class="download-copy">
                        { "Download our app now and experience the future of class scheduling. \
                           Available for Android." }
                    </p>
                    <div class="cta-group">
                        { for [DownloadTarget::Android, DownloadTarget::Ios].into_iter().map(|target| {
                            let variant = if target.is_available() {
                                ButtonVariant::Default
                            } else {
                                ButtonVariant::Outline
                            };
                            html! {
                                <Button
                                    size={ButtonSize::Lg}
                                    variant={variant}
                                    disabled={!target.is_available()}
                                    onclick={download_callback(target)}
                                >
                                    { target.label() }
                                    <i class="fas fa-arrow-right btn-icon"></i>
                                </Button>
                            }
                        }) }
                    </div>
                </div>
            </section>
        </div>
    }
}
