use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_open_modal: Callback<()>,
}

fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let open_modal = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(()))
    };

    let nav_link = |id: &'static str, label: &'static str| {
        html! {
            <button class="nav-link" onclick={Callback::from(move |_: MouseEvent| scroll_to_section(id))}>
                {label}
            </button>
        }
    };

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 2rem 2.5rem;
                        mix-blend-mode: difference;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        cursor: pointer;
                        background: none;
                        border: none;
                    }
                    .nav-logo-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        background: #2563eb;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 900;
                        font-style: italic;
                        font-size: 1.25rem;
                        color: #fff;
                    }
                    .nav-logo-text {
                        font-size: 1.5rem;
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        color: #fff;
                    }
                    .nav-links {
                        display: none;
                        gap: 2.5rem;
                        font-size: 0.875rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    @media (min-width: 768px) {
                        .nav-links { display: flex; }
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: #fff;
                        font: inherit;
                        text-transform: uppercase;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .nav-link:hover { color: #3b82f6; }
                    .nav-quote-button {
                        padding: 0.5rem 1.5rem;
                        background: #fff;
                        color: #000;
                        font-size: 0.875rem;
                        font-weight: 700;
                        border: none;
                        border-radius: 9999px;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .nav-quote-button:hover {
                        background: #2563eb;
                        color: #fff;
                    }
                "#}
            </style>
            <button class="nav-logo" onclick={Callback::from(move |_: MouseEvent| scroll_to_section("home"))}>
                <div class="nav-logo-mark">{"D"}</div>
                <span class="nav-logo-text">{"더푸른클린"}</span>
            </button>
            <div class="nav-links">
                { nav_link("home", "Home") }
                { nav_link("about", "About") }
                { nav_link("services", "Service") }
                { nav_link("contact", "Contact") }
            </div>
            <button class="nav-quote-button" onclick={open_modal}>
                {"견적 문의"}
            </button>
        </nav>
    }
}
