//! The one side effect of a redirect: pointing the browsing context somewhere else.
//! Uses `window.location` on the client; on the server there is nothing to navigate.

use leptos::logging::{error, log};

use crate::error::RedirectError;
use crate::redirect::RedirectTarget;

/// Something that can send the current browsing context to a new location.
pub trait Navigator {
    fn navigate(&self, href: &str) -> Result<(), RedirectError>;
}

/// Navigates the real browser window (full page load, like following a link).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "hydrate")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, href: &str) -> Result<(), RedirectError> {
        let window = web_sys::window().ok_or(RedirectError::NoWindow)?;
        window
            .location()
            .set_href(href)
            .map_err(|e| RedirectError::Navigation(format!("{:?}", e)))
    }
}

#[cfg(not(feature = "hydrate"))]
impl Navigator for BrowserNavigator {
    fn navigate(&self, _href: &str) -> Result<(), RedirectError> {
        Err(RedirectError::NoWindow)
    }
}

/// Click handler body: build the destination and hand it to the navigator.
///
/// Nothing is navigated when the destination cannot be built.
pub fn redirect(target: &RedirectTarget, navigator: &impl Navigator) -> Result<(), RedirectError> {
    let href = target.href().inspect_err(|e| error!("[redirect] {} (base {:?})", e, target.base()))?;
    log!("[redirect] navigating to {}", href);
    navigator
        .navigate(&href)
        .inspect_err(|e| error!("[redirect] {}", e))
}
