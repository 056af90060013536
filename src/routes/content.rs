use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use uuid::Uuid;

use super::NotFound;
use crate::models::{build_comment_tree, Comment, CommentNode, ContentItem, ContentKind};

pub const ANONYMOUS_NAME: &str = "匿名";

const CONTENT_MAX_CHARS: usize = 2000;
const NAME_MAX_CHARS: usize = 50;

/// Outcome of a comment submission, discriminated so the UI can tell a
/// user-correctable input problem from an infrastructure failure.
#[derive(serde::Deserialize, Clone, serde::Serialize, Debug, PartialEq, Eq)]
pub enum CommentResponse {
    ValidationError(String),
    StorageError,
    Successful,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default)]
pub struct CommentsResult {
    pub comments: Vec<Comment>,
    pub error: Option<String>,
}

#[cfg(feature = "ssr")]
#[derive(Debug)]
struct NewComment {
    content: String,
    page: String,
    name: String,
    parent_id: Option<Uuid>,
}

/// First failing rule wins; the returned message is shown to the user as-is.
#[cfg(feature = "ssr")]
fn validate_comment(
    content: String,
    page: String,
    name: Option<String>,
    parent_id: Option<String>,
) -> Result<NewComment, String> {
    let content = content.trim();
    if content.is_empty() {
        return Err("コメント内容は必須です".into());
    }
    if content.chars().count() > CONTENT_MAX_CHARS {
        return Err("コメントは2000文字以内で入力してください".into());
    }

    if page.is_empty() {
        return Err("ページIDは必須です".into());
    }

    let name = name.as_deref().unwrap_or_default().trim();
    if name.chars().count() > NAME_MAX_CHARS {
        return Err("名前は50文字以内で入力してください".into());
    }
    let name = if name.is_empty() {
        ANONYMOUS_NAME.to_string()
    } else {
        name.to_string()
    };

    let parent_id = match parent_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(Uuid::parse_str(raw).map_err(|_| "返信先の指定が不正です".to_string())?),
    };

    Ok(NewComment {
        content: content.to_string(),
        page,
        name,
        parent_id,
    })
}

#[server(AddCommentAction, "/api")]
#[tracing::instrument]
pub async fn add_comment(
    content: String,
    page: String,
    name: Option<String>,
    parent_id: Option<String>,
) -> Result<CommentResponse, ServerFnError> {
    let new_comment = match validate_comment(content, page, name, parent_id) {
        Ok(x) => x,
        Err(message) => return Ok(CommentResponse::ValidationError(message)),
    };

    match Comment::insert(
        new_comment.content,
        new_comment.name,
        new_comment.page,
        new_comment.parent_id,
    )
    .await
    {
        Ok(_) => Ok(CommentResponse::Successful),
        Err(x) => {
            tracing::error!("Error while adding a comment: {x:?}");
            Ok(CommentResponse::StorageError)
        }
    }
}

#[server(GetCommentsAction, "/api", "GetJson")]
#[tracing::instrument]
pub async fn get_comments(page: String) -> Result<CommentsResult, ServerFnError> {
    match Comment::for_page(&page).await {
        Ok(comments) => Ok(CommentsResult {
            comments,
            error: None,
        }),
        Err(x) => {
            tracing::error!("Error fetching comments: {x:?}");
            Ok(CommentsResult {
                comments: Vec::new(),
                error: Some("コメントの取得に失敗しました".into()),
            })
        }
    }
}

#[server(GetContentAction, "/api", "GetJson")]
#[tracing::instrument]
pub async fn get_content(kind: String, slug: String) -> Result<Option<ContentItem>, ServerFnError> {
    Ok(ContentKind::from_path(&kind).and_then(|kind| ContentItem::find(kind, &slug)))
}

#[tracing::instrument]
#[component]
pub fn ContentPage() -> impl IntoView {
    let params = use_params_map();
    let content = create_resource(
        move || {
            params.with(|p| {
                (
                    p.get("kind").cloned().unwrap_or_default(),
                    p.get("slug").cloned().unwrap_or_default(),
                )
            })
        },
        |(kind, slug)| async move { get_content(kind, slug).await },
    );

    let title = create_rw_signal(String::from("Loading"));

    view! {
        <Title text=move || title.get()/>

        <Suspense fallback=move || view! {
            <div class="container page">
                <p class="loading-hint">"読み込み中..."</p>
            </div>
        }>
            <ErrorBoundary fallback=|_| view! {
                <div class="container page">
                    <p class="error-messages">
                        "ページの読み込みに失敗しました。時間をおいて再度お試しください。"
                    </p>
                </div>
            }>
                {move || {
                    content.get().map(move |x| {
                        x.map(move |item| match item {
                            Some(item) => {
                                title.set(item.title.clone());
                                view! { <ContentDetail item/> }.into_view()
                            }
                            None => {
                                title.set("ページが見つかりません".into());
                                view! { <NotFound/> }.into_view()
                            }
                        })
                    })
                }}
            </ErrorBoundary>
        </Suspense>
    }
}

#[component]
fn ContentDetail(item: ContentItem) -> impl IntoView {
    let page_id = item.slug.clone();
    let release_date = item.release_date.replace('-', "/");

    view! {
        <div class="container page">
            <article class="content-detail">
                <h1 class="content-title">{item.title.clone()}</h1>
                <div class="content-cover">
                    <img src=item.image_url.clone() alt=item.title.clone()/>
                </div>
                <p class="content-description">{item.description.clone()}</p>
                <div class="content-facts">
                    <span class="content-badge">{item.kind.label()}</span>
                    <span class="content-release">"公開日: " {release_date}</span>
                </div>
            </article>

            <CommentSection page_id/>
        </div>
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CommentSubmission {
    content: String,
    name: String,
    parent_id: Option<Uuid>,
}

pub(crate) type CommentSubmitSignal =
    Action<CommentSubmission, Result<CommentResponse, ServerFnError>>;

/// The comment thread under a content page. Owns all compose state: the root
/// form fields, the shared reply form fields, and which comment (if any) has
/// the reply form open. The freshly fetched flat list is turned into a tree
/// on every render, so a refetch after a successful submit is all it takes
/// to show the authoritative thread.
#[component]
fn CommentSection(page_id: String) -> impl IntoView {
    let page = store_value(page_id);

    let name = create_rw_signal(String::new());
    let content = create_rw_signal(String::new());
    let replying_to = create_rw_signal(None::<Uuid>);
    let reply_name = create_rw_signal(String::new());
    let reply_content = create_rw_signal(String::new());
    let error_message = create_rw_signal(None::<String>);

    let submit: CommentSubmitSignal = create_action(move |input: &CommentSubmission| {
        let input = input.clone();
        let page = page.get_value();
        async move {
            add_comment(
                input.content,
                page,
                Some(input.name),
                input.parent_id.map(|id| id.to_string()),
            )
            .await
        }
    });
    let submit_result = submit.value();
    let is_submitting = submit.pending();

    let comments = create_resource(
        move || page.get_value(),
        |page| async move { get_comments(page).await },
    );

    create_effect(move |_| match submit_result.get() {
        Some(Ok(CommentResponse::Successful)) => {
            if replying_to.get_untracked().is_some() {
                reply_content.set(String::new());
                reply_name.set(String::new());
                replying_to.set(None);
            } else {
                content.set(String::new());
            }
            error_message.set(None);
            comments.refetch();
        }
        Some(Ok(CommentResponse::ValidationError(message))) => {
            error_message.set(Some(message));
        }
        Some(Ok(CommentResponse::StorageError)) => {
            error_message.set(Some("コメントの追加に失敗しました".into()));
        }
        Some(Err(x)) => {
            tracing::error!("Error while submitting a comment: {x:?}");
            error_message.set(Some("コメントの送信に失敗しました".into()));
        }
        None => {}
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        // fast client-side check; the server re-validates
        if content.get_untracked().trim().is_empty() {
            return;
        }
        submit.dispatch(CommentSubmission {
            content: content.get_untracked(),
            name: name.get_untracked(),
            parent_id: None,
        });
    };

    view! {
        <section class="comments-section">
            <h2 class="comments-title">
                "コメント ("
                {move || {
                    comments
                        .get()
                        .and_then(Result::ok)
                        .map(|result| result.comments.len())
                        .unwrap_or_default()
                }}
                ")"
            </h2>

            <form class="comment-form" on:submit=on_submit>
                <input
                    class="comment-name-input"
                    placeholder="名前（任意）"
                    maxlength="50"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <div class="comment-form-row">
                    <input
                        class="comment-content-input"
                        placeholder="コメントを書く..."
                        maxlength="2000"
                        required=true
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "送信中..." } else { "送信" }}
                    </button>
                </div>
                {move || {
                    error_message
                        .get()
                        .map(|message| view! { <p class="comment-error">{message}</p> })
                }}
            </form>

            <Suspense fallback=move || view! {
                <p class="comments-loading">"コメントを読み込み中..."</p>
            }>
                <ErrorBoundary fallback=|_| view! {
                    <p class="error-messages">
                        "コメントの読み込みに失敗しました。時間をおいて再度お試しください。"
                    </p>
                }>
                    {move || {
                        comments.get().map(move |x| {
                            x.map(move |result| {
                                let is_empty = result.comments.is_empty();
                                let tree = build_comment_tree(&result.comments);
                                view! {
                                    {result
                                        .error
                                        .clone()
                                        .map(|message| view! { <p class="comment-soft-error">{message}</p> })}
                                    <div class="comment-list">
                                        <For
                                            each=move || tree.clone()
                                            key=|node| node.comment.id
                                            children=move |node| {
                                                view! {
                                                    <CommentItem
                                                        comment=node
                                                        replying_to
                                                        reply_name
                                                        reply_content
                                                        submit
                                                    />
                                                }
                                            }
                                        />
                                        <Show when=move || is_empty fallback=|| ()>
                                            <p class="comments-empty">
                                                "まだコメントはありません。最初のコメントを投稿しましょう！"
                                            </p>
                                        </Show>
                                    </div>
                                }
                            })
                        })
                    }}
                </ErrorBoundary>
            </Suspense>
        </section>
    }
}

/// One comment plus its replies. Returns an erased `View` because the
/// component recurses into its children.
#[component]
fn CommentItem(
    comment: CommentNode,
    replying_to: RwSignal<Option<Uuid>>,
    reply_name: RwSignal<String>,
    reply_content: RwSignal<String>,
    submit: CommentSubmitSignal,
    #[prop(default = 0)] depth: usize,
) -> impl IntoView {
    let id = comment.comment.id;
    let is_submitting = submit.pending();
    let author = comment
        .comment
        .name
        .clone()
        .unwrap_or_else(|| ANONYMOUS_NAME.to_string());
    let posted_at = display_time(&comment.comment.created_at);

    let toggle_reply = move |_| {
        replying_to.update(|current| {
            *current = if *current == Some(id) { None } else { Some(id) };
        });
    };

    let on_reply_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if reply_content.get_untracked().trim().is_empty() {
            return;
        }
        submit.dispatch(CommentSubmission {
            content: reply_content.get_untracked(),
            name: reply_name.get_untracked(),
            parent_id: Some(id),
        });
    };

    let replies = comment
        .children
        .iter()
        .map(|child| {
            view! {
                <CommentItem
                    comment=child.clone()
                    replying_to
                    reply_name
                    reply_content
                    submit
                    depth=depth + 1
                />
            }
        })
        .collect_view();

    view! {
        <div class="comment-item" class:nested={depth > 0}>
            <div class="comment-body">
                <div class="comment-meta">
                    <span class="comment-author">{author}</span>
                    <span class="comment-date">{posted_at}</span>
                    <button class="comment-reply-toggle" on:click=toggle_reply>
                        "返信"
                    </button>
                </div>
                <p class="comment-content">{comment.comment.content.clone()}</p>

                <Show when=move || replying_to.get() == Some(id) fallback=|| ()>
                    <form class="comment-reply-form" on:submit=on_reply_submit>
                        <input
                            class="comment-name-input"
                            placeholder="名前（任意）"
                            maxlength="50"
                            prop:value=move || reply_name.get()
                            on:input=move |ev| reply_name.set(event_target_value(&ev))
                        />
                        <div class="comment-form-row">
                            <input
                                class="comment-content-input"
                                placeholder="返信を書く..."
                                maxlength="2000"
                                required=true
                                autofocus=true
                                prop:value=move || reply_content.get()
                                on:input=move |ev| reply_content.set(event_target_value(&ev))
                            />
                            <button type="submit" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "送信中..." } else { "返信" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </div>
            {replies}
        </div>
    }
    .into_view()
}

/// "2024-05-01T10:00:00.000Z" -> "2024/05/01 10:00"; falls back to the raw
/// value if it does not parse.
fn display_time(created_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|t| t.format("%Y/%m/%d %H:%M").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_as_local_style_dates() {
        assert_eq!(
            display_time("2024-05-01T10:02:00.000Z"),
            "2024/05/01 10:02"
        );
        assert_eq!(display_time("not a date"), "not a date");
    }

    #[cfg(feature = "ssr")]
    mod validation {
        use super::super::*;

        fn validate(
            content: &str,
            page: &str,
            name: Option<&str>,
            parent_id: Option<&str>,
        ) -> Result<NewComment, String> {
            validate_comment(
                content.to_string(),
                page.to_string(),
                name.map(String::from),
                parent_id.map(String::from),
            )
        }

        #[test]
        fn accepts_content_at_the_limit() {
            let content = "あ".repeat(2000);
            let result = validate(&content, "abc", None, None).unwrap();
            assert_eq!(result.content, content);
        }

        #[test]
        fn rejects_content_over_the_limit() {
            let content = "あ".repeat(2001);
            assert_eq!(
                validate(&content, "abc", None, None).unwrap_err(),
                "コメントは2000文字以内で入力してください"
            );
        }

        #[test]
        fn rejects_empty_and_whitespace_content() {
            assert_eq!(
                validate("", "abc", None, None).unwrap_err(),
                "コメント内容は必須です"
            );
            assert_eq!(
                validate("   \n\t ", "abc", None, None).unwrap_err(),
                "コメント内容は必須です"
            );
        }

        #[test]
        fn content_is_checked_before_page() {
            assert_eq!(validate("", "", None, None).unwrap_err(), "コメント内容は必須です");
        }

        #[test]
        fn rejects_missing_page() {
            assert_eq!(
                validate("こんにちは", "", None, None).unwrap_err(),
                "ページIDは必須です"
            );
        }

        #[test]
        fn missing_or_blank_name_defaults_to_anonymous() {
            let result = validate("こんにちは", "abc", None, None).unwrap();
            assert_eq!(result.name, ANONYMOUS_NAME);

            let result = validate("こんにちは", "abc", Some("   "), None).unwrap();
            assert_eq!(result.name, ANONYMOUS_NAME);
        }

        #[test]
        fn name_length_boundary() {
            let just_right = "名".repeat(50);
            let result = validate("こんにちは", "abc", Some(&just_right), None).unwrap();
            assert_eq!(result.name, just_right);

            let too_long = "名".repeat(51);
            assert_eq!(
                validate("こんにちは", "abc", Some(&too_long), None).unwrap_err(),
                "名前は50文字以内で入力してください"
            );
        }

        #[test]
        fn content_and_name_are_trimmed() {
            let result = validate("  こんにちは  ", "abc", Some(" 花子 "), None).unwrap();
            assert_eq!(result.content, "こんにちは");
            assert_eq!(result.name, "花子");
        }

        #[test]
        fn parent_id_parses_or_defaults_to_none() {
            assert!(validate("こんにちは", "abc", None, None)
                .unwrap()
                .parent_id
                .is_none());
            assert!(validate("こんにちは", "abc", None, Some(""))
                .unwrap()
                .parent_id
                .is_none());

            let id = Uuid::from_u128(7);
            let result =
                validate("こんにちは", "abc", None, Some(&id.to_string())).unwrap();
            assert_eq!(result.parent_id, Some(id));

            assert_eq!(
                validate("こんにちは", "abc", None, Some("not-a-uuid")).unwrap_err(),
                "返信先の指定が不正です"
            );
        }
    }
}
