//! 收藏页

use leptos::prelude::*;

use crate::app::Route;
use crate::store::PoemsStore;

#[component]
pub fn FavoritesView() -> impl IntoView {
    let store = expect_context::<PoemsStore>();
    let navigate = expect_context::<WriteSignal<Route>>();

    view! {
        <section class="favorites">
            <div class="favorites-head">
                <h2>"我的收藏"</h2>
                <Show when=move || !store.favorite_ids().is_empty()>
                    <button
                        class="btn btn-small btn-tertiary"
                        on:click=move |_| store.clear_favorites()
                    >
                        "清空收藏"
                    </button>
                </Show>
            </div>

            <Show
                when=move || !store.favorite_ids().is_empty()
                fallback=|| view! { <p class="text-muted">"还没有收藏，去诗词列表看看吧"</p> }
            >
                <div class="poem-grid">
                    <For
                        each=move || store.favorite_poems()
                        key=|poem| poem.id
                        children=move |poem| {
                            let id = poem.id;
                            view! {
                                <div class="poem-card">
                                    <h3 on:click=move |_| navigate.set(Route::PoemDetail(id))>
                                        {poem.title.clone()}
                                    </h3>
                                    <p class="poem-meta">
                                        {format!("{} · {}", poem.dynasty, poem.author)}
                                    </p>
                                    <button
                                        class="btn btn-small"
                                        on:click=move |_| store.set_favorite(id, false)
                                    >
                                        "取消收藏"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            // 收藏 id 在当页与快照都解析不到时会被静默隐藏
            <Show when=move || store.favorite_poems().len() < store.favorite_ids().len()>
                <p class="text-muted">"部分收藏的诗词暂未加载，翻页后可见"</p>
            </Show>
        </section>
    }
}
