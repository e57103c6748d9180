use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let subscribed = use_state(|| false);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let onsubmit = {
        let email = email.clone();
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if email.trim().is_empty() {
                return;
            }
            let email = email.clone();
            let subscribed = subscribed.clone();
            spawn_local(async move {
                // No backend; simulate the round trip.
                TimeoutFuture::new(config::form_delay_ms()).await;
                log::info!("newsletter signup simulated");
                subscribed.set(true);
                email.set(String::new());
            });
        })
    };

    let year = web_sys::js_sys::Date::new_0().get_full_year();

    let footer_css = r#"
        .site-footer { background: #111827; color: white; padding: 3rem 1rem 1.5rem; }
        .footer-grid {
            max-width: 1200px;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
            gap: 2rem;
        }
        .footer-grid p, .footer-grid a { color: #9ca3af; text-decoration: none; }
        .footer-grid a:hover { color: #F5DF4D; }
        .footer-grid ul { list-style: none; padding: 0; line-height: 2; }
        .footer-logo { font-weight: bold; font-size: 1.5rem; margin-bottom: 1rem; }
        .footer-logo span { color: #F5DF4D; margin-right: 0.5rem; }
        .footer-social { display: flex; gap: 1rem; font-size: 1.2rem; }
        .newsletter { display: flex; }
        .newsletter input { flex: 1; padding: 0.5rem 1rem; border: none; border-radius: 6px 0 0 6px; }
        .newsletter button {
            background: #F5DF4D;
            border: none;
            padding: 0.5rem 1rem;
            border-radius: 0 6px 6px 0;
            font-weight: 500;
            cursor: pointer;
        }
        .footer-bottom {
            max-width: 1200px;
            margin: 2rem auto 0;
            padding-top: 1.5rem;
            border-top: 1px solid #1f2937;
            color: #6b7280;
            font-size: 0.875rem;
            text-align: center;
        }
    "#;

    html! {
        <footer class="site-footer">
            <style>{footer_css}</style>
            <div class="footer-grid">
                <div>
                    <div class="footer-logo"><span>{"AI"}</span>{"Helmet"}</div>
                    <p>{"Revolutionizing road safety in India with cutting-edge AI technology to prevent accidents and save lives."}</p>
                    <div class="footer-social">
                        <a href="#" aria-label="Facebook"><i class="fa-brands fa-facebook-f"></i></a>
                        <a href="#" aria-label="Twitter"><i class="fa-brands fa-twitter"></i></a>
                        <a href="#" aria-label="Instagram"><i class="fa-brands fa-instagram"></i></a>
                        <a href="#" aria-label="LinkedIn"><i class="fa-brands fa-linkedin-in"></i></a>
                    </div>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        <li><a href="#">{"Home"}</a></li>
                        <li><a href="#about">{"About"}</a></li>
                        <li><a href="#features">{"Features"}</a></li>
                        <li><a href="#stats">{"Statistics"}</a></li>
                        <li><a href="#contact">{"Contact"}</a></li>
                        <li><a href="#">{"Privacy Policy"}</a></li>
                        <li><a href="#">{"Terms of Service"}</a></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Newsletter"}</h3>
                    <p>{"Subscribe to our newsletter for the latest updates on the AI Helmet project."}</p>
                    if *subscribed {
                        <p style="color: #F5DF4D;">{"Thanks for subscribing!"}</p>
                    }
                    <form class="newsletter" onsubmit={onsubmit}>
                        <input
                            type="email"
                            placeholder="Your email address"
                            value={(*email).clone()}
                            oninput={oninput}
                            required=true
                        />
                        <button type="submit">{"Subscribe"}</button>
                    </form>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("\u{00A9} {} AI Helmet Project. All rights reserved.", year)}
            </div>
        </footer>
    }
}
