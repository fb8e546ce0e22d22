use arkiv::browser::{View, ViewStatus};
use arkiv::catalog::Catalog;
use arkiv::pagination::PageButton;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 36;
const MASKED_NAME: &str = "[viewer discretion advised]";

pub(crate) fn print_view(view: &View) {
    match view.status {
        ViewStatus::Loading => {
            println!("{}", "Loading...".dimmed());
            return;
        }
        ViewStatus::Empty => {
            println!("No items match the current filters.");
            return;
        }
        ViewStatus::Ready => {}
    }

    for item in &view.items {
        let name = if item.sensitive && !view.content_visible {
            MASKED_NAME.dimmed().to_string()
        } else {
            item.name.bold().to_string()
        };
        let display_width = if item.sensitive && !view.content_visible {
            MASKED_NAME.width()
        } else {
            item.name.width()
        };
        let pad = NAME_WIDTH.saturating_sub(display_width);
        println!(
            "  {}{} {}  {}",
            name,
            " ".repeat(pad),
            item.date.to_string().yellow(),
            item.media.dimmed()
        );
    }

    println!();
    println!("{}", pagination_bar(view));
    println!(
        "{}",
        format!(
            "Page {} of {} ({} items, sorted by {})",
            view.current_page,
            view.total_pages,
            view.total_items,
            view.state.sort_key.label()
        )
        .dimmed()
    );
}

fn pagination_bar(view: &View) -> String {
    let mut parts = Vec::new();
    for button in &view.buttons {
        match button {
            PageButton::Prev => parts.push("‹".to_string()),
            PageButton::Number { page, active: true } => {
                parts.push(format!("[{}]", page).bold().to_string())
            }
            PageButton::Number { page, active: false } => parts.push(page.to_string()),
            PageButton::Next => parts.push("›".to_string()),
        }
    }
    parts.join(" ")
}

pub(crate) fn print_location(query: &str) {
    println!("{}", format!("?{}", query).dimmed());
}

pub(crate) fn print_facets(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("The catalog has no items.");
        return;
    }

    println!("{}", "Years:".bold());
    for year in catalog.years() {
        println!("  {}", year);
    }
    println!();
    println!("{}", "Media:".bold());
    for kind in catalog.media_kinds() {
        println!("  {}", kind);
    }
}
