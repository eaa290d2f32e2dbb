use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="section">
            <div class="container container-narrow not-found">
                <h2>{"Page not found"}</h2>
                <p>{"This page could not be verified. Or found."}</p>
                <Link<Route> to={Route::Home} classes="button button-primary">
                    {"Back to home"}
                </Link<Route>>
            </div>
        </section>
    }
}
