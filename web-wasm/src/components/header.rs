//! 页头与导航

use leptos::prelude::*;

use crate::app::Route;

#[component]
pub fn Header<F>(route: ReadSignal<Route>, on_navigate: F) -> impl IntoView
where
    F: Fn(Route) + 'static + Clone + Send,
{
    let nav_item = move |label: &'static str, target: Route| {
        let on_navigate = on_navigate.clone();
        view! {
            <button
                class="nav-link"
                class:active=move || route.get() == target
                on:click=move |_| on_navigate(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <header class="header">
            <h1>"诗词雅集"</h1>
            <nav class="nav">
                {nav_item("首页", Route::Home)}
                {nav_item("诗词", Route::Poems)}
                {nav_item("收藏", Route::Favorites)}
                {nav_item("关于", Route::About)}
            </nav>
        </header>
    }
}
