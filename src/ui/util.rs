use unsegen::base::*;

/// Writes `text` with `style` applied on top of the cursor's current style.
pub(crate) fn write_styled(cursor: &mut Cursor, style: StyleModifier, text: &str) {
    let saved_style = cursor.get_style_modifier();
    cursor.apply_style_modifier(style);
    cursor.write(text);
    cursor.set_style_modifier(saved_style);
}

pub(crate) fn writeln_styled(cursor: &mut Cursor, style: StyleModifier, text: &str) {
    write_styled(cursor, style, text);
    cursor.write("\n");
}

/// Pads `text` to exactly `width` columns, cutting it short with an
/// ellipsis if it does not fit.
pub(crate) fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        format!("{}{}", text, " ".repeat(width - len))
    } else if width == 0 {
        String::new()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("Priya", 8), "Priya   ");
        assert_eq!(fit("priya.patel@example.com", 10), "priya.pat…");
        assert_eq!(fit("₹45,678", 7), "₹45,678");
        assert_eq!(fit("abc", 0), "");
    }
}
