use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::{Button, ButtonVariant, ExternalLinkIcon};
use crate::navigation::{BrowserNavigator, Navigator, redirect};
use crate::redirect::RedirectTarget;

/// Button that sends the whole page to `url`, carrying `email` as a query parameter.
///
/// Everything the click handler needs comes from these props. When the
/// destination can't be built (blank `url`) the click shows an inline error
/// instead of navigating.
#[component]
pub fn RedirectButton(
    /// Label, rendered exactly as given
    #[prop(into)]
    button_text: String,
    /// Base destination, e.g. `https://example.com/signup`
    #[prop(into)]
    url: String,
    /// Sent as `?email=...` when present
    #[prop(optional_no_strip, into)]
    email: Option<String>,
    #[prop(optional)] variant: ButtonVariant,
) -> impl IntoView {
    let target = StoredValue::new(RedirectTarget::new(url, email));
    let (failure, set_failure) = signal(None::<String>);

    let on_click = move |_: MouseEvent| {
        target.with_value(|t| redirect_and_report(t, &BrowserNavigator, set_failure));
    };

    view! {
        <div class="flex justify-start w-full">
            <Button variant=variant class="inline-flex items-center gap-2 w-auto" on_click=on_click>
                {button_text}
                <ExternalLinkIcon size=16 />
            </Button>
        </div>
        <RedirectAlert failure=failure />
    }
}

/// Click body: navigate, leaving the reason in `failure` when that fails.
/// A successful click clears any earlier failure.
pub fn redirect_and_report(target: &RedirectTarget, navigator: &impl Navigator, failure: WriteSignal<Option<String>>) {
    failure.set(redirect(target, navigator).err().map(|e| e.to_string()));
}

/// Inline error under a redirect button; renders nothing while `failure` is empty.
#[component]
pub fn RedirectAlert(failure: ReadSignal<Option<String>>) -> impl IntoView {
    move || {
        failure.get().map(|msg| {
            view! { <p role="alert" class="mt-1 text-sm text-[var(--danger)]">{msg}</p> }
        })
    }
}
