pub mod contact;
pub mod contact_form;
pub mod content;
pub mod error;
pub mod navigation;
pub mod router;
pub mod scroll_spy;
pub mod transition;
