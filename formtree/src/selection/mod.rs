//! Selection over the tree: toggling, select-all, clear and extraction.

mod extract;
mod mode;
mod toggle;

pub use extract::{
    DefaultPreview, PreviewFormatter, committed_value, extract_selected, preview_text,
    preview_text_with,
};
pub use mode::{SelectionMode, SelectionPolicy};
pub use toggle::{clear, select_all, toggle};
