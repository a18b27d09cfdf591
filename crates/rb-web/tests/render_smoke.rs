//! Smoke test: server-render the redirect components and check the markup.

#![cfg(feature = "ssr")]

use leptos::prelude::*;
use rb_web::components::RedirectAlert;
use rb_web::config::RedirectMessage;
use rb_web::pages::MessageList;
use rb_web::{ButtonVariant, RedirectButton, RedirectButtonProps, RedirectElement};

fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| f().into_view().to_html())
}

#[test]
fn renders_label_icon_and_default_variant() {
    let html = render(|| {
        view! {
            <RedirectButton
                button_text="Go to Snowflake Login"
                url="https://example.com/snowflake_login/"
                email="a@b.com".to_string()
            />
        }
    });

    assert!(html.contains("Go to Snowflake Login"), "{}", html);
    assert!(html.contains("data-variant=\"default\""), "{}", html);
    assert!(html.contains("<svg"), "Should include the external-link glyph: {}", html);
    assert!(
        html.find("Go to Snowflake Login") < html.find("<svg"),
        "Label should come before the glyph"
    );
    assert!(html.contains("flex justify-start w-full"));
    assert!(!html.contains("role=\"alert\""), "No error before any click");
}

#[test]
fn renders_supplied_variant() {
    let html = render(|| {
        view! { <RedirectButton button_text="Delete" url="/danger" variant=ButtonVariant::Destructive /> }
    });

    assert!(html.contains("data-variant=\"destructive\""), "{}", html);
    assert!(html.contains(ButtonVariant::Destructive.classes()));
}

#[test]
fn element_renders_from_host_json() {
    let props = RedirectButtonProps::from_json(
        r#"{"buttonText":"Sign in with Microsoft","url":"/login/azure-ad","variant":"outline"}"#,
    )
    .unwrap();

    let html = render(move || view! { <RedirectElement config=props /> });

    assert!(html.contains("Sign in with Microsoft"), "{}", html);
    assert!(html.contains("data-variant=\"outline\""), "{}", html);
}

#[test]
fn message_list_renders_each_message() {
    let messages = vec![
        RedirectMessage {
            content: "You need to login to Snowflake".into(),
            button: RedirectButtonProps {
                button_text: "Go to Snowflake Login".into(),
                url: "https://example.com/snowflake_login/".into(),
                email: Some("a@b.com".into()),
                variant: ButtonVariant::Default,
            },
        },
        RedirectMessage {
            content: "Microsoft sign-in failed".into(),
            button: RedirectButtonProps {
                button_text: "Sign in with Microsoft".into(),
                url: "/login/azure-ad".into(),
                email: None,
                variant: ButtonVariant::Secondary,
            },
        },
    ];

    let html = render(move || view! { <MessageList messages=messages /> });

    assert!(html.contains("You need to login to Snowflake"));
    assert!(html.contains("Microsoft sign-in failed"));
    assert_eq!(html.matches("<button").count(), 2, "{}", html);
}

#[test]
fn empty_message_list_says_so() {
    let html = render(|| view! { <MessageList messages=Vec::new() /> });
    assert!(html.contains("No redirects configured."), "{}", html);
}

#[test]
fn alert_renders_failure_text() {
    let html = render(|| {
        let (failure, _) = signal(Some("redirect url is missing".to_string()));
        view! { <RedirectAlert failure=failure /> }
    });

    assert!(html.contains("role=\"alert\""), "{}", html);
    assert!(html.contains("redirect url is missing"), "{}", html);
}

#[test]
fn alert_is_empty_without_failure() {
    let html = render(|| {
        let (failure, _) = signal(None::<String>);
        view! { <RedirectAlert failure=failure /> }
    });

    assert!(!html.contains("role=\"alert\""), "{}", html);
}
