use remind_me_site::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("starting {}", config::APP_NAME);
    yew::Renderer::<App>::new().render();
}
