pub mod home;
pub mod list;
pub mod route;
pub mod topic_detail;

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

pub const TITLE: &str = "LogIsland";

/// Navigation entries shown on every page: label and route.
pub const NAV_LINKS: [(&str, &str); 3] = [("TOPICS", "/topic"), ("JOBS", "/job"), ("ERRORS", "/error")];

/// Renders rows under a header line.
pub fn render_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(columns.to_vec());
    for row in rows {
        table.add_row(row.clone());
    }
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_before_rows() {
        let rows = vec![
            vec!["name1".to_string(), "doc1".to_string()],
            vec!["a".to_string(), "longer documentation".to_string()],
        ];
        let table = render_table(&["name", "documentation"], &rows);
        let lines: Vec<&str> = table.lines().collect();
        let header = lines.iter().position(|l| l.contains("name") && l.contains("documentation")).unwrap();
        let first = lines.iter().position(|l| l.contains("name1") && l.contains("doc1")).unwrap();
        let second = lines.iter().position(|l| l.contains("longer documentation")).unwrap();
        assert!(header < first && first < second);
    }
}
