use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod motion;
mod components {
    pub mod animated_section;
    pub mod feature_card;
    pub mod icons;
    pub mod rotating_text;
    pub mod timeline;
    pub mod waitlist_button;
}
mod pages {
    pub mod landing;
}

use components::waitlist_button::WaitlistButton;
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
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="top-bar">
            <style>
                {r#"
                    .top-bar {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: #fff;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    @keyframes bar-drop-in {
                        from { opacity: 0; transform: translateY(-50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .top-bar-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        animation: bar-drop-in 0.5s ease-out both;
                    }
                    .top-bar-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #4F46E5;
                        margin: 0;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .top-bar-logo:hover {
                        transform: scale(1.05);
                    }
                    .top-bar-logo:active {
                        transform: scale(0.95);
                    }
                    .header-cta {
                        background: #4F46E5;
                        color: #fff;
                        font-weight: 700;
                        border: none;
                        border-radius: 9999px;
                        padding: 0.5rem 1rem;
                        font-size: 0.9rem;
                        cursor: pointer;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .header-cta:hover {
                        background: #4338CA;
                        transform: scale(1.05);
                    }
                    .header-cta:active {
                        transform: scale(0.95);
                    }
                "#}
            </style>
            <div class="top-bar-content">
                <h1 class="top-bar-logo">{"GRACE"}</h1>
                <WaitlistButton label="Join the Waitlist" classes="header-cta" />
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
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
