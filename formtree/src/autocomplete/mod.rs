//! Autocomplete session: the widget lifecycle around the tree operations.

mod props;
mod rows;
mod state;
mod window;

pub use props::AutocompleteProps;
pub use rows::{Row, flatten};
pub use state::{Autocomplete, ClearOutcome, Commit, FilterOutcome, InitOutcome, ItemOutcome};
pub use window::RenderWindow;
