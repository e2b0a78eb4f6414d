//! 搜索栏: 关键词/朝代/标签筛选

use leptos::prelude::*;

use crate::store::PoemsStore;

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = expect_context::<PoemsStore>();

    // 本地草稿，点击搜索时才写入 store（任一筛选变化都会重置到第 1 页）
    let (keyword, set_keyword) = signal(store.keyword());
    let (dynasty, set_dynasty) = signal(store.dynasty());
    let (tag, set_tag) = signal(store.tag());

    let on_search = move |_| {
        store.set_keyword(&keyword.get());
        store.set_dynasty(&dynasty.get());
        store.set_tag(&tag.get());
        store.fetch();
    };

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="关键词: 标题、作者、诗句..."
                prop:value=move || keyword.get()
                on:input=move |ev| {
                    set_keyword.set(event_target_value(&ev));
                }
            />
            <select on:change=move |ev| {
                set_dynasty.set(event_target_value(&ev));
            }>
                <option value="" selected=move || dynasty.get().is_empty()>"全部朝代"</option>
                <option value="唐" selected=move || dynasty.get() == "唐">"唐"</option>
                <option value="宋" selected=move || dynasty.get() == "宋">"宋"</option>
                <option value="元" selected=move || dynasty.get() == "元">"元"</option>
                <option value="明" selected=move || dynasty.get() == "明">"明"</option>
                <option value="清" selected=move || dynasty.get() == "清">"清"</option>
            </select>
            <input
                type="text"
                placeholder="标签"
                prop:value=move || tag.get()
                on:input=move |ev| {
                    set_tag.set(event_target_value(&ev));
                }
            />
            <button class="btn btn-primary" on:click=on_search>"搜索"</button>
        </div>
    }
}
