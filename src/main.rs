use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod observer;
mod controller {
    pub mod contact;
    pub mod panels;
    pub mod schedule;
    pub mod timeline;
}
mod components {
    pub mod contact_form;
    pub mod overlay;
    pub mod timeline;
}
mod pages {
    pub mod landing;
}

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
            info!("Unknown path, returning to the landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting tidelight landing page");
    yew::Renderer::<App>::new().render();
}
