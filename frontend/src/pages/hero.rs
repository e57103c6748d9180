use yew::prelude::*;

use crate::components::camera_view::CameraView;
use crate::components::helmet::HelmetVisualization;
use crate::hooks::use_viewport_scroll;

const PARALLAX_SPEED: f64 = 0.3;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let scroll = use_viewport_scroll();
    let progress = scroll.progress();
    let camera_active = use_state(|| false);

    // Clicks only count once the helmet has zoomed in far enough.
    let activate = {
        let camera_active = camera_active.clone();
        Callback::from(move |_: ()| {
            if progress.click_through_enabled() {
                log::info!("opening camera demo");
                camera_active.set(true);
            } else {
                log::debug!("demo click ignored at progress {:.2}", progress.value());
            }
        })
    };
    let on_close = {
        let camera_active = camera_active.clone();
        Callback::from(move |_: ()| camera_active.set(false))
    };

    let hero_css = r#"
        .hero-section {
            position: relative;
            min-height: 100vh;
            background: linear-gradient(to bottom, #050A30, #000814);
            overflow: hidden;
        }
        .hero-particle {
            position: absolute;
            border-radius: 50%;
            background: #F5DF4D;
            animation: float 6s ease-in-out infinite;
        }
        @keyframes float { 50% { transform: translateY(-20px); opacity: 0.4; } }
        .hero-inner {
            position: relative;
            z-index: 10;
            max-width: 1200px;
            margin: 0 auto;
            padding: 8rem 1rem 0;
            text-align: center;
        }
        .hero-inner h1 {
            font-size: 3.75rem;
            font-weight: bold;
            color: white;
            margin-bottom: 1rem;
        }
        .hero-inner h1 span { color: #F5DF4D; }
        .hero-inner p {
            font-size: 1.5rem;
            color: #d1d5db;
            max-width: 48rem;
            margin: 0 auto;
        }
        .hero-actions {
            margin-top: 2rem;
            display: flex;
            justify-content: center;
            transition: opacity 0.5s;
        }
        .hero-actions button {
            background: #F5DF4D;
            color: black;
            border: none;
            padding: 0.75rem 1.5rem;
            border-radius: 6px;
            font-weight: 500;
            cursor: pointer;
        }
        .hero-caption {
            margin-top: 2rem;
            font-size: 1.5rem;
            font-weight: 600;
            color: #F5DF4D;
            transition: opacity 0.5s, transform 0.5s;
        }
        @media (max-width: 768px) {
            .hero-inner h1 { font-size: 2.25rem; }
            .hero-inner p { font-size: 1.25rem; }
        }
    "#;

    html! {
        <section class="hero-section">
            <style>{hero_css}</style>
            <div class="hero-particle" style="top: 25%; left: 25%; width: 4px; height: 4px;"></div>
            <div class="hero-particle" style="top: 75%; left: 50%; width: 8px; height: 8px; animation-delay: 1s;"></div>
            <div class="hero-particle" style="top: 50%; left: 75%; width: 4px; height: 4px; animation-delay: 2s;"></div>
            <div class="hero-particle" style="top: 66%; left: 33%; width: 6px; height: 6px; animation-delay: 3s;"></div>
            <div class="hero-inner">
                <h1><span>{"AI"}</span>{" Helmet"}</h1>
                <p>{"Revolutionizing road safety in India with advanced AI technology"}</p>
                <div class="hero-actions" style={format!("opacity: {};", progress.demo_button_opacity())}>
                    <button onclick={activate.reform(|_: MouseEvent| ())}>{"Try Demo"}</button>
                </div>
                <div
                    class="hero-caption"
                    style={format!(
                        "opacity: {}; transform: translateY({}px);",
                        progress.caption_reveal(),
                        progress.caption_offset()
                    )}
                >
                    {"Camera Demo \u{2013} Click the helmet to activate!"}
                </div>
                <HelmetVisualization
                    progress={progress}
                    parallax={scroll.parallax(PARALLAX_SPEED)}
                    on_screen_click={activate}
                />
            </div>
            if *camera_active {
                <CameraView on_close={on_close} />
            }
        </section>
    }
}
