pub mod console;
pub mod html;

pub use console::{render_console, ConsoleRenderer};
pub use html::{render_html, HtmlRenderer, PLACEHOLDER};
