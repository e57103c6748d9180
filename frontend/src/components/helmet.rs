use yew::prelude::*;

use crate::scroll::ScrollProgress;

#[derive(Properties, PartialEq)]
pub struct HelmetVisualizationProps {
    pub progress: ScrollProgress,
    /// Raw parallax offset in pixels; damped before use.
    pub parallax: f64,
    pub on_screen_click: Callback<()>,
}

#[function_component(HelmetVisualization)]
pub fn helmet_visualization(props: &HelmetVisualizationProps) -> Html {
    let hovered = use_state(|| false);
    let progress = props.progress;
    let clickable = progress.click_through_enabled();

    let onclick = {
        let on_screen_click = props.on_screen_click.clone();
        Callback::from(move |_: MouseEvent| {
            if progress.click_through_enabled() {
                on_screen_click.emit(());
            }
        })
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let helmet_css = r#"
        .helmet-container {
            position: relative;
            width: 100%;
            height: 80vh;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
        }
        .helmet-wrapper {
            transition: all 0.7s;
        }
        .helmet-body {
            position: relative;
            width: 16rem;
            height: 14rem;
            background: linear-gradient(to bottom, #292929, #151515);
            border-radius: 120px 120px 0 0;
            box-shadow: 0 10px 25px rgba(0, 0, 0, 0.5);
        }
        .helmet-screen {
            position: absolute;
            top: 2.5rem;
            left: 50%;
            transform: translateX(-50%);
            width: 12rem;
            height: 6rem;
            background: linear-gradient(to bottom, #1a237e, #3949ab);
            border-radius: 8px 8px 0 0;
            overflow: hidden;
            cursor: pointer;
            transition: all 0.5s;
        }
        .helmet-screen.glow {
            box-shadow: 0 0 18px rgba(245, 223, 77, 0.8);
        }
        .helmet-screen.screen-active {
            background: linear-gradient(to bottom, #283593, #5c6bc0);
        }
        .screen-header {
            display: flex;
            justify-content: space-between;
            padding: 0.3rem 0.5rem;
            font-size: 0.6rem;
            color: rgba(255, 255, 255, 0.8);
        }
        .screen-grid {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 0.25rem;
            padding: 0 0.5rem;
            font-size: 6px;
            color: white;
        }
        .screen-grid div {
            background: rgba(0, 0, 0, 0.2);
            border-radius: 4px;
            height: 1.3rem;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .helmet-stripe {
            position: absolute;
            top: 5rem;
            left: 0;
            width: 100%;
            height: 0.5rem;
            background: #F5DF4D;
        }
        .helmet-vent {
            position: absolute;
            bottom: 2.5rem;
            width: 2rem;
            height: 0.5rem;
            background: #111;
            border-radius: 999px;
        }
        .helmet-vent.left { left: 2rem; }
        .helmet-vent.right { right: 2rem; }
        .helmet-chin {
            position: absolute;
            bottom: -2rem;
            left: 50%;
            transform: translateX(-50%);
            width: 8rem;
            height: 4rem;
            background: #1D1D1D;
            border-radius: 0 0 12px 12px;
        }
        .helmet-prompt {
            position: absolute;
            bottom: 4rem;
            left: 50%;
            transform: translateX(-50%);
            text-align: center;
            color: white;
            font-weight: bold;
            font-size: 1.25rem;
            transition: all 0.7s;
            pointer-events: none;
        }
    "#;

    html! {
        <div class="helmet-container" style={format!("transform: translateY({}px);", props.parallax * 0.05)}>
            <style>{helmet_css}</style>
            <div
                class="helmet-wrapper"
                style={format!("transform: scale({}); opacity: {};", progress.helmet_scale(), progress.helmet_opacity())}
            >
                <div class="helmet-body">
                    <div
                        class={classes!(
                            "helmet-screen",
                            progress.screen_active().then_some("screen-active"),
                            (*hovered).then_some("glow")
                        )}
                        style={format!(
                            "opacity: {}; pointer-events: {};",
                            progress.screen_opacity(),
                            if clickable { "auto" } else { "none" },
                        )}
                        onclick={onclick}
                        onmouseenter={onmouseenter}
                        onmouseleave={onmouseleave}
                    >
                        <div class="screen-header">
                            <span>{"AI HELMET"}</span>
                            <span>{"SCANNING"}</span>
                        </div>
                        <div class="screen-grid">
                            <div>{"\u{25CF}"}</div>
                            <div>{"ROAD MAP"}</div>
                            <div>{"DETECTION"}</div>
                            <div>{"\u{25CB}"}</div>
                        </div>
                    </div>
                    <div class="helmet-stripe"></div>
                    <div class="helmet-vent right"></div>
                    <div class="helmet-vent left"></div>
                    <div class="helmet-chin"></div>
                </div>
            </div>
            <div class="helmet-prompt" style={format!("opacity: {};", progress.scroll_prompt_opacity())}>
                <p>{"Scroll to activate"}</p>
                <i class="fa-solid fa-arrow-down"></i>
            </div>
            <div class="helmet-prompt" style={format!("opacity: {};", progress.click_prompt_opacity())}>
                <p>{"Click to activate camera"}</p>
                <i class="fa-solid fa-circle-plus"></i>
            </div>
        </div>
    }
}
