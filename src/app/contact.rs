use std::rc::Rc;

use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use super::icons::{GitHubIcon, LinkedInIcon, LocationIcon, MailIcon, PhoneIcon};
use super::reveal::Reveal;
use crate::contact::{
    Channel, ContactDispatcher, ContactError, ContactPayload, MailHandoff, RelayConfig,
    FAILURE_NOTICE,
};
use crate::content::PERSONAL_INFO;
use crate::state::SectionId;

/// Navigates the document to the `mailto:` URI.
struct BrowserMailHandoff;

impl MailHandoff for BrowserMailHandoff {
    fn open(&self, uri: &str) -> Result<(), ContactError> {
        window()
            .location()
            .set_href(uri)
            .map_err(|e| ContactError::Handoff(format!("{e:?}")))
    }
}

thread_local! {
    // created on first submit; clones share the relay and its client
    static DISPATCHER: ContactDispatcher = ContactDispatcher::from_config(
        RelayConfig::from_build_env(),
        Rc::new(BrowserMailHandoff),
    );
}

fn dispatcher() -> ContactDispatcher {
    DISPATCHER.with(Clone::clone)
}

#[derive(Debug, Clone, PartialEq)]
struct Notice {
    text: String,
    is_err: bool,
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=SectionId::Contact.as_str() class="section contact">
            <div class="container">
                <Reveal class="contact-header">
                    <h2 class="section-title">
                        "Get In Touch" <span class="title-underline"></span>
                    </h2>
                    <p class="muted">
                        "I'm always open to discussing new opportunities, interesting projects, or just having a chat about technology."
                    </p>
                </Reveal>
                <div class="contact-grid">
                    <Reveal class="contact-info-section" delay_ms=100>
                        <ContactInfo />
                    </Reveal>
                    <Reveal delay_ms=200>
                        <ContactForm />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <h3 class="info-section-title">"Contact Information"</h3>
        <div class="contact-info-list">
            <a class="contact-info-item hover-target" href=format!("mailto:{}", PERSONAL_INFO.email)>
                <div class="contact-icon">
                    <MailIcon />
                </div>
                <div class="contact-info-text">
                    <span class="contact-label">"Email"</span>
                    <span class="contact-value">{PERSONAL_INFO.email}</span>
                </div>
            </a>
            <a class="contact-info-item hover-target" href=format!("tel:{}", PERSONAL_INFO.phone)>
                <div class="contact-icon">
                    <PhoneIcon />
                </div>
                <div class="contact-info-text">
                    <span class="contact-label">"Phone"</span>
                    <span class="contact-value">{PERSONAL_INFO.phone}</span>
                </div>
            </a>
            <div class="contact-info-item">
                <div class="contact-icon">
                    <LocationIcon />
                </div>
                <div class="contact-info-text">
                    <span class="contact-label">"Location"</span>
                    <span class="contact-value">{PERSONAL_INFO.location}</span>
                </div>
            </div>
        </div>
        <h3 class="info-section-title mt-8">"Social Links"</h3>
        <div class="social-links">
            <a
                class="social-link hover-target"
                href=PERSONAL_INFO.linkedin_url()
                target="_blank"
                rel="noopener noreferrer"
                aria-label="LinkedIn"
            >
                <LinkedInIcon />
            </a>
            <a
                class="social-link hover-target"
                href=PERSONAL_INFO.github_url()
                target="_blank"
                rel="noopener noreferrer"
                aria-label="GitHub"
            >
                <GitHubIcon />
            </a>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        set_notice.set(None);
        let payload = ContactPayload {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };

        spawn_local(async move {
            let dispatcher = dispatcher();
            let notice = match dispatcher.send(&payload).await {
                Ok(delivery) => {
                    if delivery.channel == Channel::Relay {
                        set_name.set(String::new());
                        set_email.set(String::new());
                        set_message.set(String::new());
                    }
                    Notice {
                        text: delivery.notice(dispatcher.recipient()),
                        is_err: false,
                    }
                }
                Err(e) => {
                    log::error!("contact form submission failed: {e}");
                    Notice {
                        text: FAILURE_NOTICE.to_string(),
                        is_err: true,
                    }
                }
            };
            set_notice.set(Some(notice));
            set_submitting.set(false);
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="form-group">
                <label for="name">"Name"</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    placeholder="Your Name"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    placeholder="your.email@example.com"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    name="message"
                    placeholder="Your message here..."
                    rows="6"
                    required=true
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="button button-primary submit-button hover-target" disabled=move || submitting.get()>
                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
            </button>
            {move || {
                notice
                    .get()
                    .map(|n| {
                        view! {
                            <p class="form-notice" class:error=n.is_err role="status">
                                {n.text}
                            </p>
                        }
                    })
            }}
        </form>
    }
}
