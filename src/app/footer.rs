use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::icons::{GitHubIcon, LinkedInIcon, MailIcon};
use crate::content::PERSONAL_INFO;
use crate::state::SectionId;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="footer">
            <div class="container footer-container">
                <div class="footer-brand">
                    <div class="footer-logo">{PERSONAL_INFO.short_name}</div>
                    <p class="muted">"Building delightful web and mobile experiences."</p>
                </div>
                <nav class="footer-nav">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a class="footer-link" href=section.anchor()>
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="footer-social">
                    <a
                        class="social-btn"
                        href=PERSONAL_INFO.github_url()
                        target="_blank"
                        rel="noreferrer"
                        aria-label="GitHub"
                    >
                        <GitHubIcon />
                    </a>
                    <a
                        class="social-btn"
                        href=PERSONAL_INFO.linkedin_url()
                        target="_blank"
                        rel="noreferrer"
                        aria-label="LinkedIn"
                    >
                        <LinkedInIcon />
                    </a>
                    <a
                        class="social-btn"
                        href=format!("mailto:{}", PERSONAL_INFO.email)
                        aria-label="Email"
                    >
                        <MailIcon />
                    </a>
                </div>
            </div>
            <div class="footer-bottom" title=format!("Built {BUILD_TIME}")>
                {format!("© {year} {}. All rights reserved.", PERSONAL_INFO.name)}
            </div>
        </footer>
    }
}
