use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use serde::{Deserialize, Serialize};

use crate::components::Message;
use crate::config::RedirectMessage;
use crate::element::RedirectElement;

/// Everything the home page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteData {
    pub title: String,
    pub description: Option<String>,
    pub messages: Vec<RedirectMessage>,
}

/// Server function returning the configured messages.
/// Reads the config installed at startup; runs on the server during SSR.
#[server(FetchMessages)]
pub async fn fetch_messages() -> Result<SiteData, ServerFnError> {
    let site = crate::config::site();
    Ok(SiteData {
        title: site.title.clone(),
        description: site.description.clone(),
        messages: site.messages.clone(),
    })
}

#[component]
fn MessagesSkeleton() -> impl IntoView {
    view! {
        <div class="mb-6 border border-dashed border-[var(--rule)] p-3">
            <div class="skeleton-line font-bold mb-3">"\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}"</div>
            <div class="skeleton-line">"\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}"</div>
        </div>
    }
}

/// Message blocks for `messages`, or a notice when there are none
#[component]
pub fn MessageList(messages: Vec<RedirectMessage>) -> impl IntoView {
    if messages.is_empty() {
        return view! { <p class="text-[var(--ink-light)]">"No redirects configured."</p> }.into_any();
    }

    messages
        .into_iter()
        .map(|m| {
            view! {
                <Message content=m.content>
                    <RedirectElement config=m.button />
                </Message>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let data = Resource::new(|| (), |_| fetch_messages());

    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <Suspense fallback=move || view! { <MessagesSkeleton /> }>
                {move || {
                    data.get().map(|result| match result {
                        Ok(site) => {
                            let description = site.description.clone();
                            view! {
                                <Title text=site.title.clone() />
                                {description.clone().map(|d| view! { <Meta name="description" content=d /> })}
                                <header class="mb-8">
                                    <h1 class="text-xl font-bold">{site.title}</h1>
                                    {description.map(|d| view! { <div class="text-[var(--ink-light)] mt-2">{d}</div> })}
                                </header>
                                <MessageList messages=site.messages />
                            }
                            .into_any()
                        }
                        Err(e) => {
                            leptos::logging::error!("[home] Failed to load messages: {}", e);
                            view! {
                                <p role="alert" class="text-[var(--ink-light)]">"Redirects are unavailable right now."</p>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </main>
    }
}
