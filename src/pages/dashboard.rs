//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards redirect unauthenticated visitors to `/login` once the startup
//! session restore has run. Stats and the activity feed come from the mock
//! layer with a loading state; header controls own theme, language, and
//! logout.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::stat_card::StatCard;
use crate::net::mock;
use crate::net::types::{ActivityEntry, DashboardStats};
use crate::state::prefs::{Language, PrefsState};
use crate::state::session::SessionState;
use crate::util::{format, locale, storage, theme};

/// View model for the stat grid: label, formatted value, optional delta.
fn stat_cards(stats: &DashboardStats) -> Vec<(&'static str, String, Option<String>)> {
    let users = i64::try_from(stats.users_total).unwrap_or(i64::MAX);
    let sessions = i64::try_from(stats.sessions_active).unwrap_or(i64::MAX);
    vec![
        ("Total users", format::thousands(users), None),
        ("Active sessions", format::thousands(sessions), None),
        ("Revenue", format::currency_usd(stats.revenue_cents), None),
        (
            "Growth",
            format::percent_delta(stats.growth_pct),
            Some("vs last month".to_owned()),
        ),
    ]
}

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let prefs = expect_context::<RwSignal<PrefsState>>();
    let navigate = use_navigate();

    // Redirect to login once the restore has run and no user is present.
    let navigate_login = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate_login("/login", NavigateOptions::default());
        }
    });

    let stats = RwSignal::new(None::<DashboardStats>);
    let activity = RwSignal::new(Vec::<ActivityEntry>::new());
    let feed_loading = RwSignal::new(true);

    // Fetch the canned data once on mount; effects only run in the browser.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        leptos::task::spawn_local(async move {
            let loaded = mock::fetch_dashboard_stats().await;
            let entries = mock::fetch_recent_activity().await;
            stats.set(Some(loaded));
            activity.set(entries);
            feed_loading.set(false);
        });
    });

    let user_name = move || session.get().user.map(|u| u.name).unwrap_or_default();
    let user_email = move || session.get().user.map(|u| u.email).unwrap_or_default();
    let badge = move || format::initials(&user_name());
    let greeting_line = move || format!("{}, {}", locale::greeting(prefs.get().language), user_name());

    let on_toggle_theme = move |_| {
        let next = theme::toggle(prefs.get().dark_mode);
        prefs.update(|p| p.dark_mode = next);
    };

    let on_language_change = move |ev| {
        let language = Language::parse(&event_target_value(&ev));
        locale::set(language);
        prefs.update(|p| p.language = language);
    };

    let navigate_logout = navigate.clone();
    let on_logout = move |_| {
        let navigate = navigate_logout.clone();
        leptos::task::spawn_local(async move {
            mock::logout().await;
            storage::clear_session();
            session.update(|s| s.reset());
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <Show
            when=move || !session.get().loading && session.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if session.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Portal"</span>
                    <span class="toolbar__greeting">{greeting_line}</span>
                    <span class="toolbar__spacer" aria-hidden="true"></span>
                    <select class="toolbar__language" on:change=on_language_change>
                        {Language::ALL
                            .into_iter()
                            .map(|language| {
                                view! {
                                    <option
                                        value=language.as_str()
                                        selected=move || prefs.get().language == language
                                    >
                                        {language.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button
                        class="toolbar__theme-toggle"
                        on:click=on_toggle_theme
                        title="Toggle dark mode"
                    >
                        {move || if prefs.get().dark_mode { "Light" } else { "Dark" }}
                    </button>
                    <span class="toolbar__user">
                        <span class="toolbar__badge">{badge}</span>
                        <span class="toolbar__user-name">{user_name}</span>
                        <span class="toolbar__user-email">{user_email}</span>
                    </span>
                    <button class="toolbar__logout" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </header>

                <section class="dashboard-page__stats">
                    <Show
                        when=move || stats.get().is_some()
                        fallback=|| view! { <p class="dashboard-page__loading">"Loading stats..."</p> }
                    >
                        <div class="stat-grid">
                            {move || {
                                stats
                                    .get()
                                    .map(|s| {
                                        stat_cards(&s)
                                            .into_iter()
                                            .map(|(label, value, delta)| {
                                                view! { <StatCard label value delta/> }
                                            })
                                            .collect_view()
                                    })
                            }}
                        </div>
                    </Show>
                </section>

                <section class="dashboard-page__activity">
                    <h2>"Recent activity"</h2>
                    <Show
                        when=move || !feed_loading.get()
                        fallback=|| view! { <p class="dashboard-page__loading">"Loading activity..."</p> }
                    >
                        <ul class="activity-feed">
                            {move || {
                                activity
                                    .get()
                                    .into_iter()
                                    .map(|entry| {
                                        let when = format::relative_time(format::now_ms(), entry.ts_ms);
                                        view! {
                                            <li class="activity-feed__entry">
                                                <span class="activity-feed__message">{entry.message}</span>
                                                <span class="activity-feed__when">{when}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </section>
            </div>
        </Show>
    }
}
