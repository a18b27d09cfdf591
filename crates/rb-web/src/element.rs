//! Redirect button as a host-configurable element.
//!
//! Host applications describe the button as a JSON object
//! (`{"buttonText": ..., "url": ..., "email": ..., "variant": ...}`); this is
//! the typed form of that object and the component that renders it.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{ButtonVariant, RedirectButton};
use crate::error::RedirectError;
use crate::redirect::RedirectTarget;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectButtonProps {
    #[serde(alias = "button_text")]
    pub button_text: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "variant_or_default")]
    pub variant: ButtonVariant,
}

// `null` means "not set" just like a missing key.
fn variant_or_default<'de, D>(deserializer: D) -> Result<ButtonVariant, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<ButtonVariant>::deserialize(deserializer)?.unwrap_or_default())
}

impl RedirectButtonProps {
    pub fn from_json(json: &str) -> Result<Self, RedirectError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn target(&self) -> RedirectTarget {
        RedirectTarget::new(self.url.clone(), self.email.clone())
    }
}

#[component]
pub fn RedirectElement(config: RedirectButtonProps) -> impl IntoView {
    let RedirectButtonProps {
        button_text,
        url,
        email,
        variant,
    } = config;

    view! { <RedirectButton button_text=button_text url=url email=email variant=variant /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_host_props() {
        let props = RedirectButtonProps::from_json(
            r#"{"buttonText":"Go to Snowflake Login","url":"https://jordi.example/snowflake_login/","variant":"default","email":"Ana@Corp.io"}"#,
        )
        .unwrap();

        assert_eq!(props.button_text, "Go to Snowflake Login");
        assert_eq!(props.variant, ButtonVariant::Default);
        assert_eq!(
            props.target().href().unwrap(),
            "https://jordi.example/snowflake_login/?email=Ana%40Corp.io"
        );
    }

    #[test]
    fn email_and_variant_are_optional() {
        let props =
            RedirectButtonProps::from_json(r#"{"buttonText":"Sign in with Microsoft","url":"/login/azure-ad"}"#).unwrap();
        assert_eq!(props.email, None);
        assert_eq!(props.variant, ButtonVariant::Default);
        assert_eq!(props.target().href().unwrap(), "/login/azure-ad");
    }

    #[test]
    fn null_variant_is_default() {
        let props =
            RedirectButtonProps::from_json(r#"{"buttonText":"x","url":"/y","variant":null,"email":null}"#).unwrap();
        assert_eq!(props.variant, ButtonVariant::Default);
        assert_eq!(props.email, None);
    }

    #[test]
    fn supplied_variant_is_kept() {
        let props = RedirectButtonProps::from_json(r#"{"buttonText":"x","url":"/y","variant":"outline"}"#).unwrap();
        assert_eq!(props.variant, ButtonVariant::Outline);
    }

    #[test]
    fn variant_names_are_lenient() {
        let props = RedirectButtonProps::from_json(r#"{"buttonText":"x","url":"/y","variant":"Outline"}"#).unwrap();
        assert_eq!(props.variant, ButtonVariant::Outline);
        let props = RedirectButtonProps::from_json(r#"{"buttonText":"x","url":"/y","variant":"neon"}"#).unwrap();
        assert_eq!(props.variant, ButtonVariant::Default);
    }

    #[test]
    fn missing_url_is_rejected() {
        let err = RedirectButtonProps::from_json(r#"{"buttonText":"x"}"#).unwrap_err();
        assert!(matches!(err, RedirectError::InvalidProps(_)));
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn serializes_camel_case() {
        let props = RedirectButtonProps {
            button_text: "Go".into(),
            url: "/go".into(),
            email: None,
            variant: ButtonVariant::Ghost,
        };
        assert_eq!(
            serde_json::to_string(&props).unwrap(),
            r#"{"buttonText":"Go","url":"/go","variant":"ghost"}"#
        );
    }
}
