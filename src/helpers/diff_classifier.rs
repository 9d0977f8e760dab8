const ADDITION_MARKER: char = '+';
const NEW_FILE_HEADER: &str = "+++";

/// Reduce a unified diff to the content it adds.
///
/// Keeps lines starting with `+` except the `+++` file header, strips the
/// marker, and joins them with `\n` so that rules may span consecutive added
/// lines. Removed, context and metadata lines are dropped.
pub fn classify_added(diff_text: &str) -> String {
    diff_text
        .lines()
        .filter(|line| line.starts_with(ADDITION_MARKER) && !line.starts_with(NEW_FILE_HEADER))
        .map(|line| &line[ADDITION_MARKER.len_utf8()..])
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_line_loses_its_marker() {
        assert_eq!(classify_added("+secret=abc"), "secret=abc");
    }

    #[test]
    fn removed_line_is_dropped() {
        assert_eq!(classify_added("-secret=abc"), "");
    }

    #[test]
    fn new_file_header_is_dropped() {
        assert_eq!(classify_added("+++ b/file"), "");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(classify_added(""), "");
    }

    #[test]
    fn keeps_order_and_skips_metadata() {
        let diff = "\
diff --git a/app.py b/app.py
index 83db48f..bf269f4 100644
--- a/app.py
+++ b/app.py
@@ -1,3 +1,4 @@
 import os
-API_KEY = os.getenv(\"KEY\")
+API_KEY = \"first\"
+TOKEN = \"second\"
 
";
        assert_eq!(classify_added(diff), "API_KEY = \"first\"\nTOKEN = \"second\"");
    }

    #[test]
    fn bare_plus_line_is_an_empty_added_line() {
        assert_eq!(classify_added("+a\n+\n+b"), "a\n\nb");
    }

    #[test]
    fn crlf_diffs_are_handled() {
        assert_eq!(classify_added("+one\r\n+two\r\n"), "one\ntwo");
    }
}
