mod button;
mod external_link;
mod message;
mod redirect_button;

pub use button::{Button, ButtonVariant, UnknownVariant, button_classes};
pub use external_link::ExternalLinkIcon;
pub use message::Message;
pub use redirect_button::{RedirectAlert, RedirectButton, redirect_and_report};
