pub const VERTICAL: char = '│';
pub const HORIZONTAL: char = '─';
pub const CORNER: char = '└';
pub const BRANCH: char = '├';

/// Width of one indentation level, glyph included
pub const INDENT_WIDTH: usize = 4;

/// Connector drawn in front of a node's name
pub fn connector(is_last: bool) -> String {
    let elbow = if is_last { CORNER } else { BRANCH };
    format!("{elbow}{HORIZONTAL}{HORIZONTAL} ")
}

/// Indentation contributed by an ancestor to the lines of its descendants.
///
/// The rail keeps going while that ancestor still has siblings to print below it.
pub fn rail(ancestor_is_last: bool) -> String {
    let glyph = if ancestor_is_last { ' ' } else { VERTICAL };
    format!("{glyph}{}", " ".repeat(INDENT_WIDTH - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(false, "├── ")]
    #[case(true, "└── ")]
    fn connector_depends_on_last(#[case] is_last: bool, #[case] expected: &str) {
        assert_eq!(connector(is_last), expected);
    }

    #[rstest]
    #[case(false, "│   ")]
    #[case(true, "    ")]
    fn rail_depends_on_last(#[case] is_last: bool, #[case] expected: &str) {
        assert_eq!(rail(is_last), expected);
    }

    #[test]
    fn rail_and_connector_have_same_width() {
        for is_last in [false, true] {
            assert_eq!(rail(is_last).chars().count(), INDENT_WIDTH);
            assert_eq!(connector(is_last).chars().count(), INDENT_WIDTH);
        }
    }
}
