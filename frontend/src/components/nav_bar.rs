use yew::prelude::*;

use crate::hooks::use_viewport_scroll;

const LINKS: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#features", "Features"),
    ("#stats", "Statistics"),
    ("#contact", "Contact"),
];

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let scroll = use_viewport_scroll();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let try_demo = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let nav_css = r#"
        .nav-bar {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 40;
            padding: 1rem 0;
            background: transparent;
            transition: all 0.3s;
        }
        .nav-bar.scrolled {
            background: rgba(0, 0, 0, 0.9);
            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
            padding: 0.5rem 0;
        }
        .nav-inner {
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 1rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        .nav-logo { font-weight: bold; font-size: 1.5rem; color: white; }
        .nav-logo span { color: #F5DF4D; margin-right: 0.5rem; }
        .nav-links { display: flex; align-items: center; gap: 2rem; }
        .nav-links a, .nav-mobile a { color: white; text-decoration: none; transition: color 0.3s; }
        .nav-links a:hover, .nav-mobile a:hover { color: #F5DF4D; }
        .nav-cta {
            background: #F5DF4D;
            color: black;
            border: none;
            padding: 0.5rem 1rem;
            border-radius: 6px;
            font-weight: 500;
            cursor: pointer;
        }
        .nav-toggle { display: none; background: none; border: none; color: white; font-size: 1.5rem; }
        .nav-mobile {
            display: none;
            flex-direction: column;
            gap: 1rem;
            background: rgba(0, 0, 0, 0.95);
            max-height: 0;
            overflow: hidden;
            opacity: 0;
            transition: all 0.3s;
            padding: 0 1rem;
        }
        .nav-mobile.open { max-height: 16rem; opacity: 1; padding: 1rem; }
        @media (max-width: 768px) {
            .nav-links { display: none; }
            .nav-toggle { display: block; }
            .nav-mobile { display: flex; }
        }
    "#;

    html! {
        <nav class={classes!("nav-bar", scroll.nav_solid().then_some("scrolled"))}>
            <style>{nav_css}</style>
            <div class="nav-inner">
                <div class="nav-logo"><span>{"AI"}</span>{"Helmet"}</div>
                <div class="nav-links">
                    { for LINKS.iter().map(|(href, label)| html! { <a href={*href}>{*label}</a> }) }
                    <button class="nav-cta" onclick={try_demo.clone()}>{"Try Demo"}</button>
                </div>
                <button class="nav-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                    <i class={if *menu_open { "fa-solid fa-xmark" } else { "fa-solid fa-bars" }}></i>
                </button>
            </div>
            <div class={classes!("nav-mobile", (*menu_open).then_some("open"))}>
                { for LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                }) }
                <button class="nav-cta" onclick={try_demo}>{"Try Demo"}</button>
            </div>
        </nav>
    }
}
