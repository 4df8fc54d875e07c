//! Category display formatting

use crate::models::Category;

/// Format categories as a numbered list in grid order
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories configured.\n\nAdd some to the \"categories\" list in config.json."
            .to_string();
    }

    let mut output = String::from("Categories:\n");
    for (i, category) in categories.iter().enumerate() {
        output.push_str(&format!("  {:>2}. [{}] {}\n", i + 1, category.icon, category.title));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert!(format_category_list(&[]).starts_with("No categories configured."));
    }

    #[test]
    fn test_numbered_list() {
        let categories = vec![Category::new("Food", "F"), Category::new("Fun", "*")];
        let output = format_category_list(&categories);
        assert!(output.contains("   1. [F] Food\n"));
        assert!(output.contains("   2. [*] Fun\n"));
    }
}
