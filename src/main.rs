use gloo_timers::callback::Timeout;
use log::{info, Level};
use yew::prelude::*;

mod config;
mod lead;
mod components {
    pub mod consultation_modal;
    pub mod navbar;
    pub mod scene;
    pub mod section_title;
}
mod pages {
    pub mod landing;
}

use components::consultation_modal::ConsultationModal;
use components::navbar::Navbar;
use components::scene::Scene;
use config::LeadConfig;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let is_loaded = use_state(|| false);
    let is_modal_open = use_state(|| false);

    // Splash screen holds for 1.5s after mount, then fades out.
    {
        let is_loaded = is_loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(1_500, move || {
                    is_loaded.set(true);
                });
                timeout.forget();
                || ()
            },
            (),
        );
    }

    let open_modal = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_| is_modal_open.set(true))
    };
    let close_modal = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_| is_modal_open.set(false))
    };

    let splash_class = if *is_loaded { "splash splash-done" } else { "splash" };

    html! {
        <div class="app-shell">
            <style>
                {r#"
                    .app-shell {
                        position: relative;
                        width: 100%;
                        min-height: 100vh;
                        background: #000;
                        color: #fff;
                        overflow-x: hidden;
                    }
                    .splash {
                        position: fixed;
                        inset: 0;
                        z-index: 200;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #000;
                        transition: opacity 0.6s ease-out, visibility 0.6s;
                    }
                    .splash-done {
                        opacity: 0;
                        visibility: hidden;
                        pointer-events: none;
                    }
                    .splash-ring {
                        width: 4rem;
                        height: 4rem;
                        margin-bottom: 1rem;
                        border: 4px solid #3b82f6;
                        border-top-color: transparent;
                        border-radius: 50%;
                        animation: splash-spin 2s linear infinite;
                    }
                    @keyframes splash-spin {
                        0% { transform: scale(1) rotate(0deg); }
                        50% { transform: scale(1.2) rotate(180deg); }
                        100% { transform: scale(1) rotate(360deg); }
                    }
                    .splash-title {
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: 0.25em;
                        color: #60a5fa;
                        margin: 0;
                    }
                "#}
            </style>

            <div class={splash_class}>
                <div class="splash-ring"></div>
                <h1 class="splash-title">{"THE PUREUN CLEAN"}</h1>
            </div>

            <Navbar on_open_modal={open_modal.clone()} />
            <ConsultationModal
                is_open={*is_modal_open}
                on_close={close_modal}
                config={LeadConfig::default()}
            />

            <Scene />
            <Landing on_open_modal={open_modal} />
        </div>
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
