pub mod html;

pub use html::{escape_html, escape_multiline};
