use crate::page::{NAV_LINKS, TITLE, render_table};

pub fn render_home_page() -> String {
    let mut out = format!("{}\n\n", TITLE);
    for (label, route) in NAV_LINKS {
        out.push_str(&format!("  {:<8}{}\n", label, route));
    }
    out
}

/// There is no errors endpoint yet, so the table is always empty.
pub fn render_error_list_page() -> String {
    format!("Errors\n\n{}", render_table(&["name", "documentation"], &[]))
}

pub fn render_not_found_page(path: &str) -> String {
    format!("Page not found: {}\n", path)
}
