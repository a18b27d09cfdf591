use leptos::prelude::*;

/// One notice line followed by whatever action goes with it
#[component]
pub fn Message(#[prop(into)] content: String, children: Children) -> impl IntoView {
    view! {
        <article class="mb-6 border border-dashed border-[var(--rule)] p-3">
            <h3 class="font-bold mb-3">{content}</h3>
            <div class="inline-block">{children()}</div>
        </article>
    }
}
