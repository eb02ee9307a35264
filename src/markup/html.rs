use htmd::{
    options::{CodeBlockStyle, HeadingStyle, LinkStyle, Options},
    Element, HtmlToMarkdown,
};

/// Converts rendered release notes back into plain markdown: images and
/// in-page anchors are dropped, code blocks stay fenced, tables become pipe
/// rows, nothing is wrapped.
pub fn to_markdown(html: &str) -> std::io::Result<String> {
    let converter = HtmlToMarkdown::builder()
        .skip_tags(vec!["img", "svg", "script", "style"])
        .add_handler(vec!["a"], anchor)
        .add_handler(vec!["th", "td"], table_cell)
        .add_handler(vec!["tr"], table_row)
        .add_handler(vec!["table"], table)
        .options(Options {
            heading_style: HeadingStyle::Atx,
            link_style: LinkStyle::Inlined,
            code_block_style: CodeBlockStyle::Fenced,
            ..Default::default()
        })
        .build();

    converter.convert(html)
}

/// Inline link, or just the label for `#fragment` links (GitHub wraps every
/// heading in one) and links without a label.
fn anchor(element: Element) -> Option<String> {
    let href = element
        .attrs
        .iter()
        .find(|attr| &*attr.name.local == "href")
        .map(|attr| attr.value.to_string());

    let content = element.content;
    let label = content.trim();

    match href {
        Some(href) if !href.starts_with('#') && !label.is_empty() => {
            let leading = &content[..content.len() - content.trim_start().len()];
            let trailing = &content[content.trim_end().len()..];
            let href = href
                .replace(' ', "%20")
                .replace('(', "\\(")
                .replace(')', "\\)");

            Some(format!("{}[{}]({}){}", leading, label, href, trailing))
        }
        _ => Some(content.to_owned()),
    }
}

fn table_cell(element: Element) -> Option<String> {
    let text = element
        .content
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|");

    if text.is_empty() {
        Some(" |".to_owned())
    } else {
        Some(format!(" {} |", text))
    }
}

fn table_row(element: Element) -> Option<String> {
    Some(format!("\n|{}\n", element.content.trim_end()))
}

/// The first row is the header; a separator row follows it.
fn table(element: Element) -> Option<String> {
    let mut rows = element
        .content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('|'));

    let Some(header) = rows.next() else {
        return Some(String::new());
    };

    let columns = header.matches(" |").count().max(1);
    let mut lines = vec![header.to_owned(), format!("|{}", " --- |".repeat(columns))];
    lines.extend(rows.map(str::to_owned));

    Some(format!("\n\n{}\n\n", lines.join("\n")))
}
