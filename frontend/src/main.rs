use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod theme {
    pub mod manager;
    pub mod mode;
    pub mod palette;
    pub mod provider;
}
mod reveal {
    pub mod on_scroll;
    pub mod state;
    pub mod viewport;
}
mod contact {
    pub mod contact_form;
    pub mod form;
    pub mod mailto;
}
mod pages {
    pub mod splash;
}

use pages::splash::SplashPage;
use theme::provider::ThemeProvider;

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
            info!("Rendering splash page");
            html! { <SplashPage /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
