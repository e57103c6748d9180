use yew::prelude::*;

use crate::hooks::use_reveal;

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        title: "Real-time Hazard Detection",
        description: "Advanced computer vision algorithms identify potential hazards, obstacles, and dangerous road conditions in real-time.",
        icon: "fa-solid fa-triangle-exclamation",
    },
    Feature {
        title: "Driver Attention Monitoring",
        description: "Internal sensors track head position and eye movements to detect drowsiness and distraction, alerting riders before accidents occur.",
        icon: "fa-solid fa-eye",
    },
    Feature {
        title: "Precise Location Tracking",
        description: "GPS integration provides accurate positioning for emergency services in case of accidents, reducing response times.",
        icon: "fa-solid fa-location-dot",
    },
    Feature {
        title: "Animal Detection System",
        description: "Specialized AI models identify animals on or near roadways, a common cause of accidents in rural India.",
        icon: "fa-solid fa-paw",
    },
    Feature {
        title: "Automatic Emergency Response",
        description: "In case of detected accidents, the system automatically contacts emergency services with location and severity information.",
        icon: "fa-solid fa-truck-medical",
    },
    Feature {
        title: "Road Quality Analysis",
        description: "Continuous monitoring of road surfaces to identify potholes, cracks, and other hazards, contributing to a community road quality database.",
        icon: "fa-solid fa-road",
    },
];

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    delay_ms: u32,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let (reveal_ref, visible) = use_reveal(0.1);
    html! {
        <div
            ref={reveal_ref}
            class={classes!("feature-card", "reveal", visible.then_some("visible"))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            <div class="feature-icon"><i class={props.icon}></i></div>
            <h3>{props.title}</h3>
            <p>{props.description}</p>
        </div>
    }
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let feature_css = r#"
        .features-section { padding: 5rem 0; background: #f9fafb; }
        .features-intro { text-align: center; color: #4b5563; max-width: 48rem; margin: 0 auto 4rem; }
        .feature-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 2rem;
        }
        .feature-card {
            background: white;
            border-radius: 8px;
            box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
            padding: 1.5rem;
        }
        .feature-card p { color: #4b5563; }
        .feature-icon {
            width: 3rem;
            height: 3rem;
            border-radius: 50%;
            background: rgba(245, 223, 77, 0.15);
            color: #c9b21e;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.3rem;
            margin-bottom: 1rem;
        }
    "#;
    html! {
        <section id="features" class="features-section">
            <style>{feature_css}</style>
            <div class="section-inner">
                <h2>{"Key Features"}</h2>
                <div class="section-rule"></div>
                <p class="features-intro">
                    {"The AI Helmet combines cutting-edge technology with practical design to create a comprehensive safety solution for riders."}
                </p>
                <div class="feature-grid">
                    { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <FeatureCard
                            title={feature.title}
                            description={feature.description}
                            icon={feature.icon}
                            delay_ms={(i as u32 % 3 + 1) * 100}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
