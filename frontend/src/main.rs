use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod components;
mod error;
mod format;
mod forms;
mod models;
mod pages;
mod router;
mod session;
mod settings;
mod stats;

use router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    settings::init_settings();
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("FinSight starting, API at {}", settings.api_base);
    yew::Renderer::<App>::new().render();
}
