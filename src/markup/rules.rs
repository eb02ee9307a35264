use once_cell::sync::Lazy;
use regex::Regex;

pub const TRUNCATION_MARKER: &str = "... (truncated)";

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#{1,6}\s+(.+)$").expect("valid heading pattern"));
static FENCE_LANGUAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[a-z]*\n").expect("valid fence pattern"));
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\s*[-*]\s+)").expect("valid list item pattern"));

/// `[label](url)` becomes `<url|label>`.
pub fn rewrite_links(text: &str) -> String {
    LINK.replace_all(text, "<${2}|${1}>").into_owned()
}

/// Markdown headings become bold lines.
pub fn rewrite_headings(text: &str) -> String {
    HEADING.replace_all(text, "*${1}*").into_owned()
}

pub fn strip_fence_languages(text: &str) -> String {
    FENCE_LANGUAGE.replace_all(text, "```\n").into_owned()
}

pub fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Puts a line break in front of every list item so Slack does not glue
/// bullets onto the preceding paragraph.
pub fn space_list_items(text: &str) -> String {
    LIST_ITEM.replace_all(text, "\n${1}").into_owned()
}

/// Cuts `text` to `limit` characters and appends the truncation marker.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => format!("{}{}", &text[..end], TRUNCATION_MARKER),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_rewrite_links_to_slack_syntax() {
        let text = "See [the docs](https://docs.nestjs.com) and [#42](https://github.com/x/y/pull/42)";

        assert_eq!(
            rewrite_links(text),
            "See <https://docs.nestjs.com|the docs> and <https://github.com/x/y/pull/42|#42>"
        );
    }

    #[test]
    fn should_leave_links_with_empty_label_alone() {
        assert_eq!(rewrite_links("[](#anchor)"), "[](#anchor)");
    }

    #[test]
    fn should_bold_every_heading_level() {
        let text = "# One\n## Two\n###### Six\n####### Seven\n#NoSpace";

        assert_eq!(
            rewrite_headings(text),
            "*One*\n*Two*\n*Six*\n####### Seven\n#NoSpace"
        );
    }

    #[test]
    fn should_strip_fence_languages() {
        assert_eq!(
            strip_fence_languages("```typescript\nconst a = 1;\n```\n"),
            "```\nconst a = 1;\n```\n"
        );
    }

    #[test]
    fn should_unescape_html_entities() {
        assert_eq!(
            unescape_entities("Vec&lt;T&gt; &amp;&amp; Option"),
            "Vec<T> && Option"
        );
    }

    #[test]
    fn should_separate_list_items() {
        assert_eq!(space_list_items("Intro\n- one\n* two"), "Intro\n\n- one\n\n* two");
    }

    #[test]
    fn should_not_treat_bold_lines_as_list_items() {
        assert_eq!(space_list_items("*Bold*\ntext"), "*Bold*\ntext");
    }

    #[test]
    fn should_truncate_with_marker() {
        assert_eq!(truncate("abcdef", 3), "abc... (truncated)");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn should_truncate_on_char_boundaries() {
        assert_eq!(truncate("🚀🚀🚀", 2), "🚀🚀... (truncated)");
    }
}
