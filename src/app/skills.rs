use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::SKILLS;
use crate::state::SectionId;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str() class="section skills">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">
                        "Skills & Technologies" <span class="title-underline"></span>
                    </h2>
                </Reveal>
                <div class="skills-grid">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <Reveal class="card skill-card" delay_ms={i as u32 * 150}>
                                    <h3 class="card-title">{category.category}</h3>
                                    <div class="skill-items-grid">
                                        {category
                                            .items
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="skill-item hover-target">
                                                        <span class="skill-icon">{skill.icon}</span>
                                                        <span class="skill-name">{skill.name}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
