// Helpers for checking that SECURITY.md stays in step with the vault contract.

use regex::Regex;

/// Returns the body of the section titled `section_name`, heading included.
/// The section ends at the next heading of the same or a higher level.
pub fn extract_section(content: &str, section_name: &str) -> String {
    let mut section_content = String::new();
    let mut section_level = None;

    for line in content.lines() {
        if let Some((level, title)) = heading(line) {
            match section_level {
                Some(open) if level <= open => break,
                None if title == section_name => section_level = Some(level),
                _ => {}
            }
        }

        if section_level.is_some() {
            section_content.push_str(line);
            section_content.push('\n');
        }
    }

    section_content
}

pub fn section_exists(content: &str, section_name: &str) -> bool {
    content
        .lines()
        .filter_map(heading)
        .any(|(_, title)| title == section_name)
}

/// Case-insensitive check that every keyword occurs somewhere in `content`.
pub fn contains_all_keywords(content: &str, keywords: &[&str]) -> bool {
    let lowercase_content = content.to_lowercase();
    keywords
        .iter()
        .all(|keyword| lowercase_content.contains(&keyword.to_lowercase()))
}

/// Variant names of a `#[repr(u32)]` error enum, in declaration order.
pub fn error_variants(source: &str) -> Vec<String> {
    let variant = Regex::new(r"(?m)^\s*([A-Z][A-Za-z0-9]*)\s*=\s*\d+\s*,").unwrap();
    variant
        .captures_iter(source)
        .map(|c| c[1].to_string())
        .collect()
}

/// Every identifier written as inline code, e.g. `VaultLocked`.
pub fn code_identifiers(content: &str) -> Vec<String> {
    let inline = Regex::new(r"`([A-Za-z_][A-Za-z0-9_]*)`").unwrap();
    inline
        .captures_iter(content)
        .map(|c| c[1].to_string())
        .collect()
}

fn heading(line: &str) -> Option<(usize, &str)> {
    if !line.starts_with('#') {
        return None;
    }
    let level = line.chars().take_while(|&c| c == '#').count();
    Some((level, line[level..].trim()))
}
