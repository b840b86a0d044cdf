use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{CERTIFICATION, EDUCATION, PERSONAL_INFO};
use crate::state::SectionId;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="section about">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">
                        "About Me" <span class="title-underline"></span>
                    </h2>
                </Reveal>
                <div class="about-grid">
                    <Reveal class="about-text" delay_ms=100>
                        {PERSONAL_INFO.about.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </Reveal>
                    <div class="about-stats">
                        {PERSONAL_INFO
                            .stats
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| {
                                view! {
                                    <Reveal class="stat-box hover-target" delay_ms={300 + i as u32 * 100}>
                                        <div class="stat-value">{stat.value}</div>
                                        <div class="stat-label">{stat.label}</div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="about-grid">
                    <Reveal class="card">
                        <h3 class="card-title">"Education"</h3>
                        <p class="card-heading">{EDUCATION.degree}</p>
                        <p>{EDUCATION.institution}</p>
                        <p class="muted">
                            {EDUCATION.field} " · " {EDUCATION.period} " · CGPA " {EDUCATION.cgpa}
                        </p>
                        <div class="tags">
                            {EDUCATION
                                .coursework
                                .iter()
                                .map(|c| view! { <span class="tag">{*c}</span> })
                                .collect_view()}
                        </div>
                    </Reveal>
                    <Reveal class="card" delay_ms=100>
                        <h3 class="card-title">"Certification"</h3>
                        <p class="card-heading">{CERTIFICATION.institution}</p>
                        <p>{CERTIFICATION.description}</p>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
