mod about;
mod contact;
mod cursor;
mod experience;
mod footer;
mod hero;
mod homepage;
mod icons;
mod navigation;
mod projects;
mod reveal;
mod scroll;
mod skills;
pub mod store;

use cursor::CustomCursor;
use footer::Footer;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_media_query;
use navigation::Navigation;
use scroll::use_section_tracker;
use store::AppStore;

use crate::content::PERSONAL_INFO;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let store = AppStore::provide();
    use_section_tracker(store);

    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");
    Effect::new(move |_| store.set_reduced_motion(reduced_motion.get()));

    // body sits outside the app root, so it follows the theme by hand
    Effect::new(move |_| {
        let colors = store.colors();
        let Some(body) = document().body() else {
            return;
        };
        let style = format!(
            "background-color:{};color:{};",
            colors.primary, colors.text
        );
        if let Err(e) = body.set_attribute("style", &style) {
            log::warn!("could not apply theme to body: {e:?}");
        }
    });

    view! {
        <Title formatter=|title| format!("{} - {title}", PERSONAL_INFO.short_name) />
        <Meta name="description" content=PERSONAL_INFO.summary />

        <Router>
            <div
                class="app"
                data-theme=move || store.mode().as_str()
                style=move || store.root_style()
            >
                <CustomCursor />
                <Navigation />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
