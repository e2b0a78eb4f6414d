//! 诗词列表与分页控件

use leptos::prelude::*;

use shici_common::{Poem, DEFAULT_PAGE_SIZE};

use crate::app::Route;
use crate::store::PoemsStore;

#[component]
pub fn PoemList() -> impl IntoView {
    let store = expect_context::<PoemsStore>();

    let prev_page = move |_| {
        if store.page() > 1 {
            store.set_page(store.page() as i64 - 1);
            store.fetch();
        }
    };

    let next_page = move |_: web_sys::MouseEvent| {
        if (store.page() as u64) < store.last_page() {
            store.set_page(store.page() as i64 + 1);
            store.fetch();
        }
    };

    let on_page_size = move |ev: web_sys::Event| {
        let size: i64 = event_target_value(&ev)
            .parse()
            .unwrap_or(DEFAULT_PAGE_SIZE as i64);
        // 单页数量变化会重置到第 1 页
        store.set_page_size(size);
        store.fetch();
    };

    view! {
        <section class="poem-list">
            <Show when=move || store.error().is_some()>
                <div class="error-banner">{move || store.error().unwrap_or_default()}</div>
            </Show>

            <Show when=move || store.loading()>
                <p class="text-muted">"加载中..."</p>
            </Show>

            <Show
                when=move || !store.poems().is_empty()
                fallback=move || {
                    view! { <p class="text-muted">"没有符合条件的诗词"</p> }
                }
            >
                <div class="poem-grid">
                    <For
                        each=move || store.poems()
                        key=|poem| poem.id
                        children=move |poem| view! { <PoemCard poem=poem /> }
                    />
                </div>
            </Show>

            <div class="pagination">
                <button
                    class="btn btn-small"
                    disabled=move || store.page() <= 1
                    on:click=prev_page
                >
                    "上一页"
                </button>
                <span class="page-indicator">
                    {move || {
                        format!("第 {} / {} 页 · 共 {} 首", store.page(), store.last_page(), store.total())
                    }}
                </span>
                <button
                    class="btn btn-small"
                    disabled=move || (store.page() as u64) >= store.last_page()
                    on:click=next_page
                >
                    "下一页"
                </button>
                <select on:change=on_page_size>
                    <option value="10" selected=move || store.page_size() == 10>"每页 10 首"</option>
                    <option value="20" selected=move || store.page_size() == 20>"每页 20 首"</option>
                    <option value="50" selected=move || store.page_size() == 50>"每页 50 首"</option>
                </select>
            </div>
        </section>
    }
}

#[component]
fn PoemCard(poem: Poem) -> impl IntoView {
    let store = expect_context::<PoemsStore>();
    let navigate = expect_context::<WriteSignal<Route>>();
    let id = poem.id;

    let first_line = poem.content.lines().next().unwrap_or("").to_string();
    let tags = poem.tags.clone().unwrap_or_default();

    view! {
        <div class="poem-card">
            <h3 on:click=move |_| navigate.set(Route::PoemDetail(id))>{poem.title.clone()}</h3>
            <p class="poem-meta">{format!("{} · {}", poem.dynasty, poem.author)}</p>
            <p class="poem-excerpt">{first_line}</p>
            <div class="poem-tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{tag}</span> })
                    .collect_view()}
            </div>
            <button
                class="btn btn-small"
                class:liked=move || store.is_favorite(id)
                on:click=move |_| store.toggle_favorite(id)
            >
                {move || if store.is_favorite(id) { "已收藏" } else { "收藏" }}
            </button>
        </div>
    }
}
