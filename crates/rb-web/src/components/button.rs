//! Generic styled button the page components render through.

use std::fmt;
use std::str::FromStr;

use leptos::ev::MouseEvent;
use leptos::logging::warn;
use leptos::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

const BASE_CLASSES: &str = "inline-flex items-center justify-center whitespace-nowrap px-3 py-1 text-sm \
     transition-colors cursor-pointer disabled:opacity-50 disabled:cursor-not-allowed";

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid ink-on-paper button; also what unknown names map to.
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    /// Lenient lookup: blank or unknown names fall back to [`ButtonVariant::Default`].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            return Self::Default;
        }
        name.parse().unwrap_or_else(|_| {
            warn!("[button] unknown variant {:?}, using default", name);
            Self::Default
        })
    }

    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-[var(--ink)] text-[var(--paper)] hover:opacity-90",
            Self::Destructive => "bg-[var(--danger)] text-[var(--paper)] hover:opacity-90",
            Self::Outline => "border border-dashed border-[var(--rule)] hover:bg-[var(--rule)]",
            Self::Secondary => "bg-[var(--rule)] hover:opacity-80",
            Self::Ghost => "hover:bg-[var(--rule)]",
            Self::Link => "underline-offset-4 hover:underline",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown button variant: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for ButtonVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

// Host props come from hand-written JSON/TOML, so names go through the same
// lenient lookup as everything else.
impl<'de> Deserialize<'de> for ButtonVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Full class string for a button of `variant` with extra caller classes.
pub fn button_classes(variant: ButtonVariant, extra: &str) -> String {
    let mut classes = format!("{} {}", BASE_CLASSES, variant.classes());
    if !extra.trim().is_empty() {
        classes.push(' ');
        classes.push_str(extra.trim());
    }
    classes
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// Extra classes appended after the variant's own
    #[prop(optional, into)]
    class: String,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_classes(variant, &class)
            data-variant=variant.as_str()
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
