//! 诗词详情页（含评论）
//!
//! 先在本地解析（当页结果、精选快照），未命中再走详情接口

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use shici_common::{Comment, Poem};

use crate::api::comments::{fetch_comments, post_comment, post_reply};
use crate::api::poems::fetch_poem_by_id;
use crate::app::Route;
use crate::store::PoemsStore;

#[component]
pub fn PoemDetail(poem_id: i64) -> impl IntoView {
    let store = expect_context::<PoemsStore>();
    let navigate = expect_context::<WriteSignal<Route>>();

    let (poem, set_poem) = signal(store.find_poem(poem_id));
    let (load_error, set_load_error) = signal(None::<String>);

    // 本地未命中时回退到详情接口
    if poem.get_untracked().is_none() {
        spawn_local(async move {
            match fetch_poem_by_id(poem_id).await {
                Ok(p) => set_poem.set(Some(p)),
                Err(err) => set_load_error.set(Some(err.to_string())),
            }
        });
    }

    view! {
        <section class="poem-detail">
            <button class="btn btn-small" on:click=move |_| navigate.set(Route::Poems)>
                "← 返回列表"
            </button>

            <Show when=move || load_error.get().is_some()>
                <div class="error-banner">{move || load_error.get().unwrap_or_default()}</div>
            </Show>

            {move || poem.get().map(|p| view! { <PoemBody poem=p /> })}

            <CommentThread poem_id=poem_id />
        </section>
    }
}

#[component]
fn PoemBody(poem: Poem) -> impl IntoView {
    let store = expect_context::<PoemsStore>();
    let id = poem.id;

    view! {
        <article class="poem-body">
            <h2>{poem.title.clone()}</h2>
            <p class="poem-meta">{format!("{} · {}", poem.dynasty, poem.author)}</p>
            <pre class="poem-content">{poem.content.clone()}</pre>

            <button
                class="btn btn-small"
                class:liked=move || store.is_favorite(id)
                on:click=move |_| store.toggle_favorite(id)
            >
                {move || if store.is_favorite(id) { "已收藏" } else { "收藏" }}
            </button>

            {poem.translation.clone().map(|translation| {
                view! {
                    <div class="poem-section">
                        <h3>"译文"</h3>
                        <p>{translation}</p>
                    </div>
                }
            })}

            {poem
                .famous_lines
                .clone()
                .filter(|lines| !lines.is_empty())
                .map(|lines| {
                    view! {
                        <div class="poem-section">
                            <h3>"名句"</h3>
                            <ul>
                                {lines
                                    .into_iter()
                                    .map(|line| view! { <li>{line}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })}

            {poem.analysis.clone().map(|analysis| {
                view! {
                    <div class="poem-section">
                        <h3>"赏析"</h3>
                        <p>{analysis}</p>
                    </div>
                }
            })}

            {poem.notes.clone().map(|notes| {
                view! {
                    <div class="poem-section">
                        <h3>"注释"</h3>
                        <p>{notes}</p>
                    </div>
                }
            })}

            <div class="poem-tags">
                {poem
                    .tags
                    .clone()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{tag}</span> })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
fn CommentThread(poem_id: i64) -> impl IntoView {
    let (comments, set_comments) = signal(Vec::<Comment>::new());
    let (draft, set_draft) = signal(String::new());
    let (author, set_author) = signal(String::new());
    let (reply_to, set_reply_to) = signal(None::<i64>);

    let reload = move || {
        spawn_local(async move {
            match fetch_comments(poem_id).await {
                Ok(list) => set_comments.set(list),
                // 评论加载失败不打扰阅读，仅留痕
                Err(err) => gloo::console::warn!("评论加载失败:", err.to_string()),
            }
        });
    };
    reload();

    let on_submit = move |_| {
        let content = draft.get();
        if content.trim().is_empty() {
            return;
        }
        let author_name = author.get();
        let author_name = (!author_name.trim().is_empty()).then(|| author_name.trim().to_string());
        let parent = reply_to.get();

        spawn_local(async move {
            let result = match parent {
                Some(parent_id) => {
                    post_reply(poem_id, parent_id, content.trim(), author_name.as_deref()).await
                }
                None => post_comment(poem_id, content.trim(), author_name.as_deref()).await,
            };
            match result {
                Ok(_) => {
                    set_draft.set(String::new());
                    set_reply_to.set(None);
                    reload();
                }
                Err(err) => gloo::console::warn!("评论发表失败:", err.to_string()),
            }
        });
    };

    view! {
        <div class="comments">
            <h3>{move || format!("评论（{}）", comments.get().len())}</h3>

            <For
                each=move || comments.get()
                key=|comment| comment.id
                children=move |comment| {
                    let comment_id = comment.id;
                    view! {
                        <div class="comment" class:reply=comment.parent_id.is_some()>
                            <span class="comment-author">{comment.author.clone()}</span>
                            <span class="comment-time">{comment.time.clone()}</span>
                            <p>{comment.content.clone()}</p>
                            <button
                                class="btn btn-small"
                                on:click=move |_| set_reply_to.set(Some(comment_id))
                            >
                                "回复"
                            </button>
                        </div>
                    }
                }
            />

            <div class="comment-form">
                <Show when=move || reply_to.get().is_some()>
                    <p class="text-muted">
                        {move || format!("回复 #{} 中...", reply_to.get().unwrap_or_default())}
                        <button class="btn btn-small" on:click=move |_| set_reply_to.set(None)>
                            "取消"
                        </button>
                    </p>
                </Show>
                <input
                    type="text"
                    placeholder="昵称（可选）"
                    prop:value=move || author.get()
                    on:input=move |ev| {
                        set_author.set(event_target_value(&ev));
                    }
                />
                <textarea
                    placeholder="写下你的感想..."
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        set_draft.set(event_target_value(&ev));
                    }
                ></textarea>
                <button class="btn btn-primary" on:click=on_submit>"发表评论"</button>
            </div>
        </div>
    }
}
