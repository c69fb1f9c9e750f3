//! Markdown Rendering
//!
//! Shipment announcements are authored in markdown. Rendering goes
//! through pulldown-cmark with tables, strikethrough and task lists
//! enabled; images are rewritten to size-constrained tags so an
//! oversized photo cannot blow up the landing page layout.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Parse announcement markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

// State for the event transformer
enum State {
    Normal,
    /// Inside an image tag whose alt-text events are being dropped
    InImage { dropped_depth: usize },
}

/// Replace image events with constrained <img> tags. The alt text
/// events that follow a Start(Image) are swallowed until its End.
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::Image { dest_url, .. }) => {
                    let html = format!(
                        r#"<img src="{}" loading="lazy" style="max-width: 100%; max-height: 400px; display: block; border-radius: 4px;" />"#,
                        dest_url
                    );
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::InImage { dropped_depth: 0 };
                }
                other => events.push(other),
            },

            State::InImage { ref mut dropped_depth } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = State::Normal;
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_formatting_renders() {
        let html = parse_markdown("# محموله جدید\n\nورود **چسب آکواریوم** از هفته آینده");
        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>چسب آکواریوم</strong>"));
    }

    #[test]
    fn tables_and_strikethrough_are_enabled() {
        let html = parse_markdown("| کالا | موجودی |\n|---|---|\n| پیچ | ~~تمام شد~~ |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>تمام شد</del>"));
    }

    #[test]
    fn images_become_constrained_tags_without_alt_text() {
        let html = parse_markdown("![توضیح تصویر](/media/announcements/12.jpg)");
        assert!(html.contains(r#"src="/media/announcements/12.jpg""#));
        assert!(html.contains("max-width: 100%"));
        assert!(!html.contains("توضیح تصویر"));
    }

    #[test]
    fn text_after_an_image_survives() {
        let html = parse_markdown("![alt](/a.png)\n\nپاراگراف بعدی");
        assert!(html.contains("پاراگراف بعدی"));
    }

    #[test]
    fn inline_variant_strips_paragraph_wrapper() {
        let html = parse_markdown_inline("متن *کوتاه*");
        assert!(!html.starts_with("<p>"));
        assert!(html.contains("<em>کوتاه</em>"));
    }
}
