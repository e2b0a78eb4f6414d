//! 应用根组件与页面切换

use leptos::prelude::*;

use crate::components::{
    favorites::FavoritesView, featured_strip::FeaturedStrip, header::Header,
    poem_detail::PoemDetail, poem_list::PoemList, search_bar::SearchBar,
};
use crate::store::PoemsStore;

/// 页面路由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Poems,
    PoemDetail(i64),
    Favorites,
    About,
}

/// 应用根组件
#[component]
pub fn App() -> impl IntoView {
    let store = PoemsStore::new();
    provide_context(store);

    let (route, set_route) = signal(Route::Home);
    provide_context(set_route);

    // 首次进入即拉取第一页
    store.fetch();

    view! {
        <div class="container">
            <Header route=route on_navigate=move |r| set_route.set(r) />

            {move || match route.get() {
                Route::Home => view! {
                    <FeaturedStrip />
                    <SearchBar />
                    <PoemList />
                }
                .into_any(),
                Route::Poems => view! {
                    <SearchBar />
                    <PoemList />
                }
                .into_any(),
                Route::PoemDetail(id) => view! { <PoemDetail poem_id=id /> }.into_any(),
                Route::Favorites => view! { <FavoritesView /> }.into_any(),
                Route::About => view! {
                    <section class="about">
                        <h2>"关于"</h2>
                        <p>"一个浏览、搜索、收藏古诗词的小站。"</p>
                        <p class="text-muted">"收藏与精选保存在浏览器本地，不会上传。"</p>
                    </section>
                }
                .into_any(),
            }}
        </div>
    }
}
