//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::{prefs::PrefsState, session::SessionState};
use crate::util::{locale, storage, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and preference contexts, restores both from
/// localStorage once on the client, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let prefs = RwSignal::new(PrefsState::default());

    provide_context(session);
    provide_context(prefs);

    // Startup restore; effects only run in the browser, so SSR output stays
    // in the loading state until hydration.
    Effect::new(move || {
        if !session.get_untracked().loading {
            return;
        }
        let restored = storage::load_session();
        session.update(|s| match restored {
            Some(payload) => s.adopt(payload),
            None => s.loading = false,
        });

        let dark_mode = theme::read_preference();
        theme::apply(dark_mode);
        let language = locale::read_preference();
        locale::apply(language);
        prefs.set(PrefsState { dark_mode, language });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
