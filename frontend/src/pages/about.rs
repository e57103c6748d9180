use yew::prelude::*;

use crate::hooks::use_reveal;

const CHALLENGES: [&str; 4] = [
    "Lack of driver attention and focus",
    "Poor road conditions and unexpected obstacles",
    "Delayed emergency response after accidents",
    "Animal crossings and unexpected intrusions",
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let (reveal_ref, visible) = use_reveal(0.1);

    let about_css = r#"
        .about-section { padding: 5rem 0; background: white; }
        .about-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
            gap: 3rem;
            align-items: center;
        }
        .about-grid p { color: #374151; margin-bottom: 1.5rem; line-height: 1.6; }
        .about-figures { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin-top: 2rem; }
        .about-figure { background: #f3f4f6; padding: 1rem; border-radius: 8px; text-align: center; }
        .about-figure strong { display: block; font-size: 1.875rem; }
        .about-card { background: #f3f4f6; border-radius: 8px; padding: 1.5rem; }
        .about-card ul { list-style: none; padding: 0; }
        .about-card li { display: flex; gap: 0.5rem; margin-bottom: 0.75rem; color: #374151; }
        .about-card i { color: #F5DF4D; }
    "#;

    html! {
        <section id="about" class="about-section">
            <style>{about_css}</style>
            <div ref={reveal_ref} class={classes!("section-inner", "reveal", visible.then_some("visible"))}>
                <h2>{"About AI Helmet"}</h2>
                <div class="section-rule"></div>
                <div class="about-grid">
                    <div>
                        <h3>{"Revolutionizing Road Safety"}</h3>
                        <p>{"India loses more lives on its roads than almost any other country. The AI Helmet puts a camera, a location sensor and an on-board model inside the helmet riders already wear."}</p>
                        <p>{"Hazards are flagged before the rider reaches them, and when the worst happens the helmet itself calls for help."}</p>
                        <div class="about-figures">
                            <div class="about-figure">
                                <strong style="color: #FF304F;">{"150K+"}</strong>
                                <span>{"Annual Road Fatalities"}</span>
                            </div>
                            <div class="about-figure">
                                <strong style="color: #F5DF4D;">{"70%"}</strong>
                                <span>{"Preventable with AI"}</span>
                            </div>
                        </div>
                    </div>
                    <div class="about-card">
                        <h3>{"Our Mission"}</h3>
                        <p>{"To make every ride safer by giving two-wheeler riders the kind of driver assistance that has so far been reserved for expensive cars."}</p>
                        <h3>{"Key Challenges We Address"}</h3>
                        <ul>
                            { for CHALLENGES.iter().map(|challenge| html! {
                                <li><i class="fa-solid fa-check"></i><span>{*challenge}</span></li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
