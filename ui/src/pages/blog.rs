use isukuhub_model::SimulatedAction;
use isukuhub_model::content::{BLOG_POSTS, BlogPost, blog_categories};
use isukuhub_model::forms::validate_subscription;
use yew::prelude::*;

use crate::components::{Cta, PageHero, Spinner};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_simulated_action, use_title};
use crate::utils::event_value;

fn visible_posts(category: Option<&str>) -> Vec<&'static BlogPost> {
    BLOG_POSTS
        .iter()
        .filter(|post| category.is_none_or(|c| post.category == c))
        .collect()
}

#[derive(Properties, PartialEq)]
struct PostCardProps {
    post: &'static BlogPost,
}

#[function_component]
fn PostCard(props: &PostCardProps) -> Html {
    let post = props.post;
    html! {
        <article class="bg-white rounded-2xl overflow-hidden border border-slate-100 \
                        shadow-sm hover:shadow-lg transition-all group flex flex-col">
            <div class="h-48 overflow-hidden relative">
                <img
                    src={post.image}
                    alt={post.title}
                    loading="lazy"
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
                <span class="absolute top-4 left-4 bg-white/90 backdrop-blur-sm text-brand-700 \
                             text-xs font-bold px-3 py-1 rounded-full">
                    {post.category}
                </span>
            </div>
            <div class="p-6 flex flex-col flex-1">
                <div class="flex items-center gap-4 text-xs text-slate-500 mb-3">
                    <span>{format!("📅 {}", post.date)}</span>
                    <span>{format!("✍ {}", post.author)}</span>
                </div>
                <h3 class="text-xl font-bold text-slate-900 mb-3 group-hover:text-brand-600 \
                           transition-colors">
                    {post.title}
                </h3>
                <p class="text-slate-600 mb-6 line-clamp-3 flex-1">{post.excerpt}</p>
                <span class="text-brand-600 font-bold text-sm">{"Read Article →"}</span>
            </div>
        </article>
    }
}

#[function_component]
fn NewsletterSignup() -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let action = use_simulated_action();
    let toasts = use_toast();

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(event_value(&e)))
    };

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let action = action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(e) = validate_subscription(&email) {
                toasts.error(e.to_string());
                error.set(Some(e.to_string()));
                return;
            }
            error.set(None);
            let email = email.clone();
            action.run_then(
                SimulatedAction::subscribe_newsletter(),
                Callback::from(move |()| email.set(String::new())),
            );
        })
    };

    let pending = action.is_pending();

    html! {
        <div class="bg-brand-900 rounded-3xl p-8 md:p-12 text-center text-white mt-20">
            <h2 class="text-3xl font-bold mb-4">{"Stay in the loop"}</h2>
            <p class="text-brand-200 mb-8 max-w-xl mx-auto">
                {"Get the latest sustainability news and platform updates delivered to your inbox."}
            </p>
            <form {onsubmit} novalidate=true class="flex flex-col sm:flex-row gap-3 max-w-md mx-auto">
                <input
                    type="email"
                    value={(*email).clone()}
                    {oninput}
                    placeholder="Enter your email"
                    class="flex-1 px-4 py-3 rounded-xl text-slate-900 focus:outline-none \
                           focus:ring-2 focus:ring-brand-400"
                />
                <button
                    type="submit"
                    disabled={pending}
                    class="px-6 py-3 bg-brand-500 hover:bg-brand-400 text-white font-bold \
                           rounded-xl transition-colors flex items-center justify-center gap-2 \
                           disabled:opacity-70"
                >
                    if pending {
                        <Spinner class={classes!("w-4", "h-4")} />
                    }
                    {"Subscribe"}
                </button>
            </form>
            if let Some(message) = &*error {
                <p class="text-sm text-red-200 mt-3">{message}</p>
            }
        </div>
    }
}

#[function_component]
pub fn BlogPage() -> Html {
    use_title("Blog");
    let category = use_state(|| None::<&'static str>);

    let chip = |label: &'static str, value: Option<&'static str>| {
        let active = *category == value;
        let onclick = {
            let category = category.clone();
            Callback::from(move |_: MouseEvent| category.set(value))
        };
        html! {
            <button
                {onclick}
                class={classes!(
                    "px-4", "py-2", "rounded-full", "text-sm", "font-semibold", "transition-colors",
                    if active {
                        "bg-brand-600 text-white"
                    } else {
                        "bg-white text-slate-600 border border-slate-200 hover:border-brand-300"
                    }
                )}
            >
                {label}
            </button>
        }
    };

    let posts = visible_posts(*category);

    html! {
        <div>
            <PageHero
                title="IsukuHub Blog"
                subtitle="Insights, updates, and stories about sustainability and smart city technology."
            />

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="flex flex-wrap gap-3 mb-10">
                    {chip("All", None)}
                    {for blog_categories().into_iter().map(|c| chip(c, Some(c)))}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {for posts.into_iter().map(|post| html! {
                        <PostCard key={post.slug} {post} />
                    })}
                </div>

                <NewsletterSignup />
            </div>
            <Cta />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_category_shows_every_post() {
        assert_eq!(visible_posts(None).len(), BLOG_POSTS.len());
    }

    #[test]
    fn category_filter_keeps_matching_posts() {
        let posts = visible_posts(Some("Education"));
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "recycling-codes");
        assert!(visible_posts(Some("Sports")).is_empty());
    }
}
