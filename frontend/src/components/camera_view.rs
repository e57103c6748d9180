use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlCanvasElement, HtmlVideoElement};
use yew::prelude::*;

use crate::config;
use crate::detection::{FrameLoop, HazardDetector, SyntheticDetector};
use crate::hooks::{use_camera, use_location};
use crate::permissions::Phase;
use crate::utils::animation_frame::AnimationFrames;
use crate::utils::canvas::OverlayPainter;

#[derive(Properties, PartialEq)]
pub struct CameraViewProps {
    pub on_close: Callback<()>,
}

/// Full-screen camera demo. Mounted only while the demo is open; unmounting
/// stops the overlay loop and releases the camera.
#[function_component(CameraView)]
pub fn camera_view(props: &CameraViewProps) -> Html {
    let camera = use_camera();
    let location = use_location();
    let video_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    let phase = camera.phase();

    {
        let camera = camera.clone();
        let location = location.clone();
        use_effect_with_deps(
            move |_| {
                let camera_request = camera.request();
                let location_request = location.request();
                spawn_local(async move {
                    match camera_request.await {
                        Err(e) if !e.is_in_flight() => log::debug!("camera demo not started: {}", e),
                        _ => {}
                    }
                });
                spawn_local(async move {
                    if let Err(e) = location_request.await {
                        log::debug!("no location for camera demo: {}", e);
                    }
                });
                || ()
            },
            (),
        );
    }

    // Hand the stream to the video element once granted.
    {
        let camera = camera.clone();
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |phase| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    match camera.stream() {
                        Some(stream) if *phase == Phase::Granted => {
                            video.set_muted(true);
                            video.set_src_object(Some(stream.media()));
                            if let Err(e) = video.play() {
                                log::warn!("video playback did not start: {:?}", e);
                            }
                        }
                        _ => video.set_src_object(None),
                    }
                }
                || ()
            },
            phase,
        );
    }

    {
        let video_ref = video_ref.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |phase| {
                let overlay = if *phase == Phase::Granted {
                    let detector = SyntheticDetector::from_entropy(config::detection_probability());
                    start_overlay(&video_ref, &canvas_ref, detector)
                } else {
                    None
                };
                move || {
                    if let Some(overlay) = overlay {
                        overlay.stop();
                    }
                }
            },
            phase,
        );
    }

    let onclose = {
        let camera = camera.clone();
        let location = location.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            camera.stop();
            location.clear();
            on_close.emit(());
        })
    };

    let (width, height) = viewport_size();
    let location_badge = match location.phase() {
        Phase::Granted => match location.fix() {
            Some(fix) => html! {
                <><span class="dot on"></span>{format!("Location active ({:.4}, {:.4})", fix.latitude, fix.longitude)}</>
            },
            None => html! { <><span class="dot on"></span>{"Location active"}</> },
        },
        Phase::Requesting => html! { <><span class="dot"></span>{"Locating..."}</> },
        Phase::Denied => html! { <><span class="dot off"></span>{"Location unavailable"}</> },
        Phase::Idle => html! { <><span class="dot"></span>{"Location off"}</> },
    };

    let camera_css = r#"
        .camera-view {
            position: fixed;
            inset: 0;
            z-index: 50;
            background: black;
        }
        .camera-video, .camera-canvas {
            position: absolute;
            inset: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
        }
        .camera-hud {
            position: absolute;
            inset: 0;
            pointer-events: none;
        }
        .hud-row {
            position: absolute;
            left: 1.25rem;
            right: 1.25rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        .hud-row.top { top: 1.25rem; padding-right: 3.5rem; }
        .hud-row.bottom { bottom: 1.25rem; }
        .hud-badge {
            background: rgba(0, 0, 0, 0.5);
            color: white;
            padding: 0.25rem 0.75rem;
            border-radius: 999px;
            font-size: 0.875rem;
            display: flex;
            align-items: center;
            gap: 0.5rem;
        }
        .hud-badge.scanning {
            background: rgba(245, 223, 77, 0.9);
            color: black;
            animation: pulse 2s infinite;
        }
        .hud-model { color: #F5DF4D; font-size: 0.875rem; }
        .dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #999; }
        .dot.on { background: #22c55e; }
        .dot.off { background: #ef4444; }
        .camera-close {
            position: absolute;
            top: 1.25rem;
            right: 1.25rem;
            z-index: 10;
            background: rgba(255, 255, 255, 0.1);
            color: white;
            border: none;
            padding: 0.5rem 0.7rem;
            border-radius: 50%;
            cursor: pointer;
            font-size: 1.2rem;
        }
        .camera-close:hover { background: rgba(255, 255, 255, 0.2); }
        .camera-panel {
            position: absolute;
            inset: 0;
            display: flex;
            align-items: center;
            justify-content: center;
            background: rgba(0, 0, 0, 0.8);
            z-index: 20;
        }
        .camera-error {
            background: white;
            padding: 1.25rem;
            border-radius: 8px;
            max-width: 28rem;
            text-align: center;
        }
        .camera-error i { color: #ef4444; font-size: 3rem; margin-bottom: 1rem; }
        .camera-error button {
            background: #2563eb;
            color: white;
            border: none;
            padding: 0.5rem 1rem;
            border-radius: 4px;
            cursor: pointer;
        }
        .camera-spinner {
            width: 3rem;
            height: 3rem;
            border: 4px solid rgba(255, 255, 255, 0.3);
            border-top-color: #F5DF4D;
            border-radius: 50%;
            animation: spin 1s linear infinite;
            margin: 0 auto 1rem;
        }
        @keyframes spin { to { transform: rotate(360deg); } }
        @keyframes pulse { 50% { opacity: 0.5; } }
    "#;

    html! {
        <div class="camera-view">
            <style>{camera_css}</style>
            <video ref={video_ref} class="camera-video" autoplay=true playsinline=true muted=true></video>
            <canvas
                ref={canvas_ref}
                class="camera-canvas"
                width={width.to_string()}
                height={height.to_string()}
            ></canvas>
            <div class="camera-hud">
                <div class="hud-row top">
                    <div class="hud-badge">{"AI Helmet \u{2022} Active"}</div>
                    <div class="hud-badge scanning">{"Scanning"}</div>
                </div>
                <div class="hud-row bottom">
                    <div class="hud-badge">{location_badge}</div>
                    <div class="hud-model">{"AI Model v1.0"}</div>
                </div>
            </div>
            <button class="camera-close" onclick={onclose.clone()} aria-label="Close camera">
                <i class="fa-solid fa-xmark"></i>
            </button>
            {
                match phase {
                    Phase::Denied => html! {
                        <div class="camera-panel">
                            <div class="camera-error">
                                <i class="fa-solid fa-circle-exclamation"></i>
                                <h3>{"Permission Error"}</h3>
                                <p>{camera.error().unwrap_or_default()}</p>
                                <button onclick={onclose}>{"Close"}</button>
                            </div>
                        </div>
                    },
                    Phase::Requesting => html! {
                        <div class="camera-panel">
                            <div style="text-align: center; color: white;">
                                <div class="camera-spinner"></div>
                                <p>{"Requesting camera access..."}</p>
                            </div>
                        </div>
                    },
                    Phase::Idle | Phase::Granted => html! {},
                }
            }
        </div>
    }
}

fn start_overlay(
    video_ref: &NodeRef,
    canvas_ref: &NodeRef,
    mut detector: impl HazardDetector + 'static,
) -> Option<FrameLoop<AnimationFrames>> {
    let video = video_ref.cast::<HtmlVideoElement>()?;
    let painter = OverlayPainter::attach(canvas_ref.cast::<HtmlCanvasElement>()?)?;
    log::info!("starting hazard overlay");
    Some(FrameLoop::start(AnimationFrames, move || {
        let annotation = detector.annotate(painter.surface());
        painter.paint(&video, annotation.as_ref());
    }))
}

fn viewport_size() -> (u32, u32) {
    let size = web_sys::window().and_then(|window| {
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some((width as u32, height as u32))
    });
    size.unwrap_or((1280, 720))
}
