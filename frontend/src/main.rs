use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod scheduling {
    pub mod assets;
    pub mod options;
    pub mod provider;
    pub mod session;
}
mod components {
    pub mod scheduling_popup;
    pub mod social_links;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use scheduling::provider::ProviderHandle;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn render_route(routes: Route, provider: ProviderHandle) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing {provider} /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting to Landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    // One provider for the whole page, handed down rather than looked up.
    let provider = use_state(ProviderHandle::calendly);

    let render = {
        let provider = (*provider).clone();
        move |routes: Route| render_route(routes, provider.clone())
    };

    html! {
        <BrowserRouter>
            <Switch<Route> {render} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
