//! HTML export of a presentation tree.
//!
//! Output is an email-safe fragment: inline `style` attributes only, grids as
//! presentation tables, and every piece of text or attribute content escaped.

use std::fmt::Write;

use letterpress_core::StyleMap;

use crate::node::{PresentationNode, RenderedBlock};
use crate::RendererConfig;

/// Convert a camelCase style key to its CSS property name.
///
/// ```
/// use letterpress_renderer::html::css_property;
///
/// assert_eq!(css_property("backgroundColor"), "background-color");
/// assert_eq!(css_property("color"), "color");
/// ```
#[must_use]
pub fn css_property(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Escape text for use in element content and quoted attributes.
#[must_use]
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn css(style: &StyleMap) -> String {
    let mut out = String::new();
    for (key, value) in style {
        let _ = write!(out, "{}:{};", css_property(key), value);
    }
    out
}

fn style_attr(out: &mut String, style: &StyleMap) {
    if !style.is_empty() {
        let _ = write!(out, " style=\"{}\"", escape(&css(style)));
    }
}

fn write_node(out: &mut String, node: &PresentationNode) {
    match node {
        PresentationNode::Text {
            tag,
            content,
            style,
        } => {
            let tag = tag.as_str();
            let _ = write!(out, "<{tag}");
            style_attr(out, style);
            let _ = write!(out, ">{}</{tag}>", escape(content));
        }
        PresentationNode::Link {
            href,
            style,
            children,
        } => {
            let _ = write!(out, "<a href=\"{}\"", escape(href));
            style_attr(out, style);
            out.push('>');
            for child in children {
                write_node(out, child);
            }
            out.push_str("</a>");
        }
        PresentationNode::Container { style, children } => {
            out.push_str("<div");
            style_attr(out, style);
            out.push('>');
            for child in children {
                write_node(out, child);
            }
            out.push_str("</div>");
        }
        PresentationNode::Image { src, alt, style } => {
            let _ = write!(out, "<img src=\"{}\" alt=\"{}\"", escape(src), escape(alt));
            style_attr(out, style);
            out.push('>');
        }
        PresentationNode::Rule {
            thickness,
            color,
            margin_top,
            margin_bottom,
        } => {
            let mut rule = String::from("border:none;height:0;");
            let _ = write!(
                rule,
                "border-top:{} solid {};",
                thickness.as_deref().unwrap_or("1px"),
                color.as_deref().unwrap_or("currentColor")
            );
            if let Some(top) = margin_top {
                let _ = write!(rule, "margin-top:{top};");
            }
            if let Some(bottom) = margin_bottom {
                let _ = write!(rule, "margin-bottom:{bottom};");
            }
            let _ = write!(out, "<hr style=\"{}\">", escape(&rule));
        }
        PresentationNode::Spacer { height } => match height {
            Some(height) => {
                let rule = format!("height:{height};line-height:{height};font-size:0;");
                let _ = write!(out, "<div style=\"{}\">&nbsp;</div>", escape(&rule));
            }
            None => out.push_str("<div></div>"),
        },
        PresentationNode::Grid {
            column_count,
            style,
            cells,
        } => {
            out.push_str("<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\"");
            style_attr(out, style);
            out.push_str("><tr>");
            let width = 100 / u32::from((*column_count).max(1));
            for cell in cells {
                let _ = write!(out, "<td width=\"{width}%\" valign=\"top\"");
                style_attr(out, &cell.style);
                let _ = write!(out, ">{}</td>", escape(&cell.content));
            }
            out.push_str("</tr></table>");
        }
        PresentationNode::List {
            ordered,
            items,
            style,
        } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let _ = write!(out, "<{tag}");
            style_attr(out, style);
            out.push('>');
            for item in items {
                let _ = write!(out, "<li>{}</li>", escape(item));
            }
            let _ = write!(out, "</{tag}>");
        }
    }
}

/// Serialize one node to an HTML fragment.
#[must_use]
pub fn node_to_html(node: &PresentationNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Serialize a rendered document to an HTML fragment, one line per block.
#[must_use]
pub fn to_html(blocks: &[RenderedBlock]) -> String {
    let mut out = String::with_capacity(blocks.len() * 128);
    for block in blocks {
        write_node(&mut out, &block.node);
        out.push('\n');
    }
    out
}

/// Wrap a rendered document in a complete HTML page using the configured
/// content width, background and font.
#[must_use]
pub fn to_html_document(blocks: &[RenderedBlock], config: &RendererConfig) -> String {
    let mut out = String::with_capacity(blocks.len() * 128 + 512);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("</head>\n");
    let body = format!("margin:0;padding:0;background-color:{};", config.background_color);
    let _ = writeln!(out, "<body style=\"{}\">", escape(&body));
    let wrapper = format!(
        "max-width:{};margin:0 auto;font-family:{};",
        config.content_width, config.font_family
    );
    let _ = writeln!(out, "<div style=\"{}\">", escape(&wrapper));
    out.push_str(&to_html(blocks));
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
