use yew::prelude::*;

mod components;
mod mock_data;
pub mod hooks;
pub mod settings;

use components::layout::Layout;
use components::reports::Reports;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Layout title="Reports">
            <Reports />
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== CRM Reports Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
