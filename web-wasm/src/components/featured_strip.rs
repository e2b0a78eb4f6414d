//! 精选诗词栏
//!
//! 展示固定的精选集；精选尚未选定时由目录状态回退为当页前 6 首

use leptos::prelude::*;

use crate::app::Route;
use crate::store::PoemsStore;

#[component]
pub fn FeaturedStrip() -> impl IntoView {
    let store = expect_context::<PoemsStore>();
    let navigate = expect_context::<WriteSignal<Route>>();

    view! {
        <Show when=move || !store.featured_poems().is_empty()>
            <section class="featured-strip">
                <h2>"精选"</h2>
                <div class="featured-grid">
                    <For
                        each=move || store.featured_poems()
                        key=|poem| poem.id
                        children=move |poem| {
                            let id = poem.id;
                            view! {
                                <div
                                    class="featured-card"
                                    on:click=move |_| navigate.set(Route::PoemDetail(id))
                                >
                                    <h4>{poem.title.clone()}</h4>
                                    <p class="poem-meta">
                                        {format!("{} · {}", poem.dynasty, poem.author)}
                                    </p>
                                </div>
                            }
                        }
                    />
                </div>
            </section>
        </Show>
    }
}
