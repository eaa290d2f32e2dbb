use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod analysis;
mod config;
mod data;
mod components {
    pub mod analysis_demo;
    pub mod dashboard_preview;
    pub mod feature_card;
    pub mod footer;
    pub mod hero;
    pub mod trend_chart;
}
mod pages {
    pub mod dashboard;
    pub mod home;
    pub mod not_found;
}

use components::footer::Footer;
use pages::{
    dashboard::Dashboard,
    home::Home,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Dashboard => {
            info!("Rendering Dashboard page");
            html! { <Dashboard /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 20.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor links still need to navigate, so no prevent_default here
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"🛡 "}{config::PRODUCT_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="/#features" class="nav-link" onclick={close_menu.clone()}>{"Features"}</a>
                    <a href="/#demo" class="nav-link" onclick={close_menu.clone()}>{"Demo"}</a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Dashboard} classes="nav-link">
                            {"Dashboard"}
                        </Link<Route>>
                    </div>
                    <a
                        href={config::get_extension_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="button button-primary"
                        onclick={close_menu}
                    >
                        {"Get Extension"}
                    </a>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="page">
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::PRODUCT_NAME);
    yew::Renderer::<App>::new().render();
}
