use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod detection;
mod hooks;
mod pages;
mod permissions;
mod scroll;
mod utils;

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
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    use_effect_with_deps(
        |_| {
            match web_sys::window().and_then(|w| w.document()) {
                Some(document) => document.set_title(config::SITE_TITLE),
                None => log::warn!("no document available, title left unchanged"),
            }
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("logger already initialised: {}", e));
    }
    log::info!("starting {}", config::SITE_TITLE);
    yew::Renderer::<App>::new().render();
}
