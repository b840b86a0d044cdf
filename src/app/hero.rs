use leptos::prelude::*;

use super::reveal::Reveal;
use super::scroll::go_to_section;
use super::store::AppStore;
use crate::content::{PERSONAL_INFO, PROFILE_IMAGE, RESUME_FILE_NAME, RESUME_PDF};
use crate::state::SectionId;

#[component]
pub fn Hero() -> impl IntoView {
    let store = AppStore::expect();

    view! {
        <section id=SectionId::Hero.as_str() class="hero">
            <div class="container hero-content">
                <Reveal class="profile-picture">
                    <img
                        class="profile-image"
                        src=PROFILE_IMAGE
                        alt=format!("{} - {}", PERSONAL_INFO.name, PERSONAL_INFO.role)
                        loading="eager"
                    />
                </Reveal>
                <Reveal delay_ms=100>
                    <h1 class="hero-name">{PERSONAL_INFO.name}</h1>
                </Reveal>
                <Reveal delay_ms=200>
                    <p class="hero-role">{PERSONAL_INFO.role}</p>
                </Reveal>
                <Reveal delay_ms=300>
                    <p class="hero-summary">{PERSONAL_INFO.summary}</p>
                </Reveal>
                <Reveal class="hero-buttons" delay_ms=400>
                    <a class="button button-primary hover-target" href=RESUME_PDF download=RESUME_FILE_NAME>
                        <span>"📥"</span>
                        <span>"Download Resume"</span>
                    </a>
                    <a
                        class="button button-secondary hover-target"
                        href=SectionId::Contact.anchor()
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to_section(store, SectionId::Contact);
                        }
                    >
                        <span>"✉️"</span>
                        <span>"Contact Me"</span>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}
