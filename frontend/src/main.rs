use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod hooks {
    pub mod scroll;
}
mod chat {
    pub mod transcript;
    pub mod player;
}
mod lead {
    pub mod submission;
    pub mod client;
}
mod components {
    pub mod toast;
    pub mod cta_button;
    pub mod floating_shapes;
    pub mod lead_capture_dialog;
    pub mod phone_mockup;
    pub mod whatsapp_chat;
}
mod pages {
    pub mod counters;
    pub mod landing;
}

use components::toast::ToastProvider;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting True Rise landing");
    yew::Renderer::<App>::new().render();
}
