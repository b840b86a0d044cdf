use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::WORK_EXPERIENCE;
use crate::state::SectionId;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=SectionId::Experience.as_str() class="section experience">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">
                        "Experience" <span class="title-underline"></span>
                    </h2>
                </Reveal>
                <div class="experience-list">
                    {WORK_EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(i, exp)| {
                            view! {
                                <Reveal class="card experience-item" delay_ms={i as u32 * 150}>
                                    <div class="experience-header">
                                        <div>
                                            <h4 class="experience-role">{exp.role}</h4>
                                            <p class="experience-company">{exp.company}</p>
                                            <p class="muted">{exp.location}</p>
                                        </div>
                                        <span class="experience-period">{exp.period}</span>
                                    </div>
                                    <ul class="experience-contributions">
                                        {exp
                                            .contributions
                                            .iter()
                                            .map(|c| view! { <li>{*c}</li> })
                                            .collect_view()}
                                    </ul>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
