use log::{info, Level};
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod content;
mod motion {
    pub mod hooks;
    pub mod interpolate;
    pub mod progress;
    pub mod reveal;
    pub mod spring;
}
mod sections {
    pub mod benefits;
    pub mod chat_demo;
    pub mod closer;
    pub mod features;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icon;
    pub mod pricing;
    pub mod steps;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
    pub mod luminivia;
    pub mod medibook;
}

use pages::luminivia::Luminivia;
use pages::medibook::MediBook;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/luminivia")]
    Luminivia,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering MediBook page");
            html! { <MediBook /> }
        }
        Route::Luminivia => {
            info!("Rendering Luminivia page");
            html! { <Luminivia /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Global css={r#"
                * { box-sizing: border-box; }
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
            "#} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
