use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod bookings_api;
mod booking {
    pub mod error;
    pub mod slots;
    pub mod selection;
    pub mod pricing;
    pub mod dates;
    pub mod source;
    pub mod redirect;
    pub mod widget;
}
mod components {
    pub mod slot_booking;
    pub mod payment_popup;
}
mod pages {
    pub mod sport;
    pub mod payment;
}

use config::{BookingConfig, SPORTS};
use pages::{
    sport::SportPage,
    payment::PaymentPage,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sport/:sport")]
    Sport { sport: String },
    #[at("/payment")]
    Payment,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Redirect<Route> to={Route::Sport { sport: BookingConfig::default().default_sport }} /> }
        },
        Route::Sport { sport } => {
            info!("Rendering {} booking page", sport);
            html! { <SportPage sport={sport} /> }
        },
        Route::Payment => {
            info!("Rendering Payment page");
            html! { <PaymentPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <h1>{"Page not found"}</h1> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

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
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"slots"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SPORTS.iter().map(|sport| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Sport { sport: sport.to_string() }} classes="nav-link">
                                { *sport }
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
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
