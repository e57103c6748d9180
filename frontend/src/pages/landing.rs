use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::pages::about::AboutSection;
use crate::pages::contact::ContactSection;
use crate::pages::features::FeaturesSection;
use crate::pages::hero::HeroSection;
use crate::pages::stats::StatsSection;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }
    let page_css = r#"
        body {
            margin: 0;
            font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
        }
        .landing-page section h2 {
            font-size: 2.5rem;
            font-weight: bold;
            margin-bottom: 1rem;
            text-align: center;
        }
        .section-rule {
            width: 5rem;
            height: 0.25rem;
            background: #F5DF4D;
            margin: 0 auto 1.5rem;
        }
        .section-inner {
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 1rem;
        }
        .reveal {
            opacity: 0;
            transform: translateY(2.5rem);
            transition: all 1s;
        }
        .reveal.visible {
            opacity: 1;
            transform: translateY(0);
        }
        @media (max-width: 768px) {
            .landing-page section h2 {
                font-size: 2rem;
            }
        }
    "#;
    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <style>{page_css}</style>
            <NavBar />
            <HeroSection />
            <AboutSection />
            <FeaturesSection />
            <StatsSection />
            <ContactSection />
            <Footer />
        </div>
    }
}
