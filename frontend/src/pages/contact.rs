use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal;

pub const SUBJECTS: [(&str, &str); 4] = [
    ("general", "General Inquiry"),
    ("support", "Technical Support"),
    ("partnership", "Partnership Opportunity"),
    ("feedback", "Feedback"),
];

const EMERGENCY_CONTACTS: [(&str, &str, &str); 6] = [
    ("National Emergency Number", "112", "Emergency"),
    ("Police", "100", "Emergency"),
    ("Ambulance", "108", "Emergency"),
    ("Fire", "101", "Emergency"),
    ("Road Accident Emergency", "1073", "Road Specific"),
    ("Highway Patrol", "1033", "Road Specific"),
];

/// Local-only contact form state. Nothing leaves the browser, and the only
/// checks are the `required` attributes on the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Returns a copy with the field called `field` set to `value`. Unknown
    /// field names leave the form unchanged.
    pub fn with_field(&self, field: &str, value: String) -> Self {
        let mut next = self.clone();
        match field {
            "name" => next.name = value,
            "email" => next.email = value,
            "subject" => next.subject = value,
            "message" => next.message = value,
            other => log::warn!("ignoring unknown contact field {:?}", other),
        }
        next
    }
}

fn field_from_event(e: &Event) -> Option<(String, String)> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    target
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| (select.name(), select.value()))
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let (reveal_ref, visible) = use_reveal(0.1);
    let form = use_state(ContactForm::default);
    let submitted = use_state(|| false);

    let onfield = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some((field, value)) = field_from_event(&e) {
                form.set(form.with_field(&field, value));
            }
        })
    };
    let oninput = onfield.reform(|e: InputEvent| -> Event { e.into() });

    let onsubmit = {
        let form = form.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = form.clone();
            let submitted = submitted.clone();
            spawn_local(async move {
                // Simulated submission; there is no backend.
                TimeoutFuture::new(config::form_delay_ms()).await;
                log::info!("contact form submission simulated");
                submitted.set(true);
                form.set(ContactForm::default());
            });
        })
    };

    let contact_css = r#"
        .contact-section { padding: 5rem 0; background: #f9fafb; }
        .contact-intro { text-align: center; color: #4b5563; max-width: 48rem; margin: 0 auto 4rem; }
        .contact-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
            gap: 3rem;
        }
        .contact-card {
            background: white;
            border-radius: 8px;
            box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
            padding: 2rem;
            margin-bottom: 2rem;
        }
        .contact-card label { display: block; color: #374151; font-weight: 500; margin-bottom: 0.5rem; }
        .contact-card input, .contact-card select, .contact-card textarea {
            width: 100%;
            box-sizing: border-box;
            padding: 0.5rem 1rem;
            border: 1px solid #d1d5db;
            border-radius: 6px;
            margin-bottom: 1rem;
        }
        .contact-card button {
            width: 100%;
            background: #F5DF4D;
            border: none;
            padding: 0.75rem 1.5rem;
            border-radius: 6px;
            font-weight: 500;
            cursor: pointer;
        }
        .contact-success {
            background: #dcfce7;
            border: 1px solid #4ade80;
            color: #15803d;
            padding: 0.75rem 1rem;
            border-radius: 4px;
            margin-bottom: 1rem;
        }
        .contact-row { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
        .contact-row small { color: #6b7280; }
        .contact-number { font-weight: bold; font-size: 1.125rem; color: #FF304F; }
        .contact-note { border-top: 1px solid #e5e7eb; padding-top: 1.5rem; font-size: 0.875rem; color: #6b7280; }
    "#;

    html! {
        <section id="contact" class="contact-section">
            <style>{contact_css}</style>
            <div ref={reveal_ref} class={classes!("section-inner", "reveal", visible.then_some("visible"))}>
                <h2>{"Contact Us"}</h2>
                <div class="section-rule"></div>
                <p class="contact-intro">
                    {"Have questions about the AI Helmet project or want to collaborate? Reach out to our team using the form below."}
                </p>
                <div class="contact-grid">
                    <div class="contact-card">
                        <h3>{"Send us a message"}</h3>
                        if *submitted {
                            <div class="contact-success">{"Thank you for your message! We'll get back to you soon."}</div>
                        }
                        <form onsubmit={onsubmit}>
                            <label for="name">{"Your Name"}</label>
                            <input type="text" id="name" name="name" value={form.name.clone()} oninput={oninput.clone()} required=true />
                            <label for="email">{"Email Address"}</label>
                            <input type="email" id="email" name="email" value={form.email.clone()} oninput={oninput.clone()} required=true />
                            <label for="subject">{"Subject"}</label>
                            <select id="subject" name="subject" onchange={onfield} required=true>
                                <option value="" selected={form.subject.is_empty()}>{"Select a subject"}</option>
                                { for SUBJECTS.iter().map(|(value, label)| html! {
                                    <option value={*value} selected={form.subject == *value}>{*label}</option>
                                }) }
                            </select>
                            <label for="message">{"Your Message"}</label>
                            <textarea id="message" name="message" rows="5" value={form.message.clone()} oninput={oninput} required=true></textarea>
                            <button type="submit">{"Send Message"}</button>
                        </form>
                    </div>
                    <div>
                        <div class="contact-card">
                            <h3>{"Get in Touch"}</h3>
                            <p><i class="fa-solid fa-phone"></i>{" +91 123 456 7890"}</p>
                            <p><i class="fa-solid fa-envelope"></i>{" info@aihelmet.org"}</p>
                            <p><i class="fa-solid fa-location-dot"></i>{" 123 Innovation Hub, Tech Park, Bangalore, Karnataka 560001, India"}</p>
                        </div>
                        <div class="contact-card">
                            <h3>{"Emergency Contacts"}</h3>
                            { for EMERGENCY_CONTACTS.iter().map(|(name, number, category)| html! {
                                <div class="contact-row">
                                    <div>
                                        <strong>{*name}</strong><br/>
                                        <small>{*category}</small>
                                    </div>
                                    <div class="contact-number">{*number}</div>
                                </div>
                            }) }
                            <p class="contact-note">
                                {"In case of emergency, always call the appropriate emergency number first. The AI Helmet system is designed to automatically contact emergency services when an accident is detected, but manual calls are always recommended as a backup."}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::default()
            .with_field("name", "Asha".into())
            .with_field("email", "asha@example.in".into())
            .with_field("subject", "support".into())
            .with_field("message", "Does it fit a half helmet?".into())
    }

    #[test]
    fn fields_update_by_name() {
        let form = filled();
        assert_eq!(form.name, "Asha");
        assert_eq!(form.subject, "support");
        assert_eq!(form.with_field("colour", "red".into()), form);
    }

    #[test]
    fn values_are_kept_verbatim() {
        let form = filled()
            .with_field("email", "asha".into())
            .with_field("subject", "sales".into())
            .with_field("message", "   ".into());
        assert_eq!(form.email, "asha");
        assert_eq!(form.subject, "sales");
        assert_eq!(form.message, "   ");
        assert_eq!(form.name, "Asha");
    }
}
