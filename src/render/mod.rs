//! Read-only views of a finished document.

mod json;
mod options;
mod text;

pub use json::{to_json, to_json_lossy, to_pretty_string, JsonFormat};
pub use options::RenderOptions;
pub use text::{get_document_abstract, get_text, render_text_contents, render_text_contents_with};
