use crate::constants::{LABEL_MAX_LINES, LABEL_MAX_LINE_LEN, LONG_LABEL_CHARS};

/// Greedy word wrap for wedge labels. Lines hold up to `max_len` characters,
/// except that a single word is never split. Once `max_lines` would be
/// exceeded the remaining words are dropped and the last line gets "…".
pub fn wrap_label(text: &str, max_len: usize, max_lines: usize) -> Vec<String> {
    let max_lines = max_lines.max(1);
    let words: Vec<&str> = text.split(' ').collect();
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in &words {
        let next = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };

        if next.chars().count() <= max_len || line.is_empty() {
            line = next;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
            if lines.len() + 1 >= max_lines {
                break;
            }
        }
    }

    let used_words = lines
        .iter()
        .flat_map(|l| l.split(' '))
        .filter(|w| !w.is_empty())
        .count()
        + if line.is_empty() { 0 } else { line.split(' ').count() };

    if !line.is_empty() {
        lines.push(line);
    }

    if used_words < words.len() {
        if let Some(last) = lines.last_mut() {
            let trimmed = last.trim_end_matches('.').to_string();
            *last = format!("{}…", trimmed);
        }
    }

    lines
}

/// Wraps with the widget's defaults and reports whether the label needs the small font.
pub fn layout_label(text: &str) -> (Vec<String>, bool) {
    let lines = wrap_label(text, LABEL_MAX_LINE_LEN, LABEL_MAX_LINES);
    let is_long = lines.len() >= LABEL_MAX_LINES || text.chars().count() > LONG_LABEL_CHARS;
    (lines, is_long)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label_stays_on_one_line() {
        assert_eq!(wrap_label("Скидка 7%", 14, 3), vec!["Скидка 7%"]);
        assert_eq!(wrap_label("ровно14символ!", 14, 3), vec!["ровно14символ!"]);
    }

    #[test]
    fn test_long_label_truncates_to_three_lines() {
        let text = "Набор из трёх мини-отрезов ткани для шитья и рукоделия дома";
        assert!(text.chars().count() > 3 * 14);
        let lines = wrap_label(text, 14, 3);
        assert_eq!(lines, vec!["Набор из трёх", "мини-отрезов", "ткани…"]);
    }

    #[test]
    fn test_three_full_lines_plus_one_word_truncates() {
        let text = "abcdefghijklmn opqrstuvwxyzab cdefghijklmnop qr";
        assert!(text.chars().count() > 3 * 14);
        let lines = wrap_label(text, 14, 3);
        assert_eq!(lines, vec!["abcdefghijklmn", "opqrstuvwxyzab", "cdefghijklmnop…"]);
    }

    #[test]
    fn test_wraps_without_truncation_when_everything_fits() {
        let lines = wrap_label("Отрез РАНФОРСА до 0.5 м", 14, 3);
        assert_eq!(lines, vec!["Отрез РАНФОРСА", "до 0.5 м"]);
        assert!(lines.iter().all(|l| !l.ends_with('…')));
    }

    #[test]
    fn test_truncation_replaces_trailing_dots() {
        let lines = wrap_label("aaaa bbbb... cccc dddd eeee", 4, 2);
        assert_eq!(lines, vec!["aaaa", "bbbb…"]);
    }

    #[test]
    fn test_single_oversized_word_is_kept_whole() {
        assert_eq!(wrap_label("Сверхдлинноеслово", 14, 3), vec!["Сверхдлинноеслово"]);
    }

    #[test]
    fn test_layout_marks_long_labels() {
        assert!(!layout_label("Скидка 5%").1);
        assert!(layout_label("Набор из 3-х мини-отрезов").1);
    }
}
