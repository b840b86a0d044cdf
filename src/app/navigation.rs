use leptos::{either::Either, prelude::*};

use super::icons::{MoonIcon, SunIcon};
use super::scroll::go_to_section;
use super::store::AppStore;
use crate::content::PERSONAL_INFO;
use crate::state::SectionId;
use crate::theme::ThemeMode;

#[component]
pub fn Navigation() -> impl IntoView {
    let store = AppStore::expect();

    view! {
        <nav class="navigation">
            <div class="nav-container">
                <a
                    href=SectionId::Hero.anchor()
                    class="nav-logo"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to_section(store, SectionId::Hero);
                    }
                >
                    {PERSONAL_INFO.short_name}
                </a>
                <div class="nav-actions">
                    <div class="hide-mobile">
                        <ThemeToggle />
                    </div>
                    <button
                        class="nav-toggle"
                        class:open=move || store.menu_open()
                        aria-label="Toggle navigation menu"
                        on:click=move |_| store.set_menu_open(!store.menu_open_untracked())
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
                <ul class="nav-links" class:open=move || store.menu_open()>
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            let is_active = move || store.active_section() == section;
                            view! {
                                <li>
                                    <a
                                        href=section.anchor()
                                        class="nav-link"
                                        class:active=is_active
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            go_to_section(store, section);
                                        }
                                    >
                                        {section.label()}
                                        <Show when=is_active>
                                            <span class="nav-link-indicator"></span>
                                        </Show>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li class="show-mobile">
                        <ThemeToggle />
                    </li>
                </ul>
            </div>
        </nav>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = AppStore::expect();

    view! {
        <button class="theme-toggle" aria-label="Toggle theme" on:click=move |_| store.toggle_theme()>
            <div class="theme-toggle-inner" class:flipped=move || store.mode().is_light()>
                // sun while dark (switches to light), moon while light
                {move || match store.mode() {
                    ThemeMode::Dark => Either::Left(view! { <SunIcon /> }),
                    ThemeMode::Light => Either::Right(view! { <MoonIcon /> }),
                }}
            </div>
            <div class="theme-toggle-glow"></div>
        </button>
    }
}
