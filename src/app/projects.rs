use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::featured_projects;
use crate::state::SectionId;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="section projects">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">
                        "Featured Projects" <span class="title-underline"></span>
                    </h2>
                </Reveal>
                <div class="projects-grid">
                    {featured_projects()
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal class="card project-card" delay_ms={i as u32 * 200}>
                                    <div class="project-main">
                                        <div class="project-header">
                                            <div>
                                                <h3 class="project-title">{project.title}</h3>
                                                <p class="project-subtitle">"Project"</p>
                                            </div>
                                            <span class="project-year">{project.year}</span>
                                        </div>
                                        <p class="muted">{project.description()}</p>
                                        <div class="tags">
                                            {project
                                                .technologies
                                                .iter()
                                                .map(|t| view! { <span class="tag">{*t}</span> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                    <ul class="project-details">
                                        {project
                                            .details
                                            .iter()
                                            .map(|d| {
                                                view! {
                                                    <li>
                                                        <span class="checkmark">"✓"</span>
                                                        {*d}
                                                    </li>
                                                }
                                            })
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
