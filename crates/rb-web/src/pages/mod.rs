mod home;

pub use home::{FetchMessages, HomePage, MessageList, SiteData, fetch_messages};
