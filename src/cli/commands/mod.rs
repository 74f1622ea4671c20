//! Handlers behind each main-menu entry.

pub mod budget;
pub mod expense;
pub mod report;

use crate::cli::console::Console;
use crate::domain::Category;

/// Prints the numbered category list used by category prompts.
pub(crate) fn render_category_choices<C: Console + ?Sized>(console: &mut C) {
    console.line("Categories:");
    for category in Category::ALL {
        console.line(format!("  {}. {}", category.index(), category));
    }
}
