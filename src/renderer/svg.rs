//! SVG generation from tree layouts
//!
//! Each node becomes a `<g>` holding its edge, label and head, with its
//! children's groups nested inside, so the document mirrors the tree.
//! Movement arrows are written after the tree so they draw on top.

use crate::layout::{
    BoundingBox, Connector, FontConfig, Movement, NodeLayout, Point, TreeConfig, TreeLayout,
};
use crate::serializer::escape_xml;

use super::SvgConfig;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Accumulates indented lines of markup
struct SvgWriter<'a> {
    config: &'a SvgConfig,
    out: String,
    depth: usize,
}

impl<'a> SvgWriter<'a> {
    fn new(config: &'a SvgConfig) -> Self {
        Self {
            config,
            out: String::new(),
            depth: 0,
        }
    }

    fn line(&mut self, markup: &str) {
        if self.config.indent > 0 {
            if !self.out.is_empty() {
                self.out.push('\n');
            }
            self.out.push_str(&" ".repeat(self.depth * self.config.indent));
        }
        self.out.push_str(markup);
    }

    fn open(&mut self, markup: &str) {
        self.line(markup);
        self.depth += 1;
    }

    fn close(&mut self, markup: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(markup);
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Render a tree layout to an SVG string
pub fn render_svg(layout: &TreeLayout, tree_config: &TreeConfig, config: &SvgConfig) -> String {
    let mut w = SvgWriter::new(config);
    if config.xml_declaration {
        w.line(XML_DECLARATION);
    }

    let view = padded(layout.bounds, config.padding);
    w.open(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.2}" height="{:.2}" viewBox="{:.2} {:.2} {:.2} {:.2}">"#,
        view.width, view.height, view.x, view.y, view.width, view.height
    ));

    w.open("<style>");
    for rule in style_rules(tree_config, config, !layout.movements.is_empty()) {
        w.line(&rule);
    }
    w.close("</style>");

    if layout.movements.iter().any(Movement::has_arrow) {
        write_arrow_marker(&mut w, &tree_config.line_color);
    }

    write_node(&mut w, &layout.root, tree_config);

    for movement in &layout.movements {
        let marker = if movement.has_arrow() {
            format!(r#" marker-end="url(#{})""#, config.name("arrow"))
        } else {
            String::new()
        };
        w.line(&format!(
            r#"<path class="{}" d="{}"{}/>"#,
            config.name("movement"),
            movement.path_data(),
            marker
        ));
    }

    w.close("</svg>");
    w.finish()
}

fn padded(bounds: BoundingBox, padding: f64) -> BoundingBox {
    BoundingBox::new(
        bounds.x - padding,
        bounds.y - padding,
        bounds.width + 2.0 * padding,
        bounds.height + 2.0 * padding,
    )
}

/// CSS for labels, heads and connectors. The movement rule is only
/// written when there is something to style.
fn style_rules(tree_config: &TreeConfig, config: &SvgConfig, movements: bool) -> Vec<String> {
    let stroke = format!(
        "stroke: {}; stroke-width: {}; fill: none;",
        tree_config.line_color, tree_config.line_width
    );
    let mut rules = vec![
        format!(".{} {{ {} }}", config.name("label"), font_css(&tree_config.node_font)),
        format!(".{} {{ {} }}", config.name("head"), font_css(&tree_config.head_font)),
        format!(".{} {{ {} }}", config.name("line"), stroke),
    ];
    if movements {
        rules.push(format!(".{} {{ {} }}", config.name("movement"), stroke));
    }
    rules
}

fn write_arrow_marker(w: &mut SvgWriter, color: &str) {
    let id = w.config.name("arrow");
    w.open("<defs>");
    w.open(&format!(
        r#"<marker id="{}" viewBox="0 0 10 10" refX="8" refY="5" markerWidth="6" markerHeight="6" orient="auto">"#,
        id
    ));
    w.line(&format!(r#"<path d="M0,0 L10,5 L0,10 Z" fill="{}"/>"#, color));
    w.close("</marker>");
    w.close("</defs>");
}

fn write_node(w: &mut SvgWriter, node: &NodeLayout, tree_config: &TreeConfig) {
    let config = w.config;
    let mut classes = config.name("node");
    if node.is_trace {
        classes.push(' ');
        classes.push_str(&config.name("trace"));
    }
    let id = if config.node_ids {
        format!(r#" id="{}""#, config.name(&format!("node-{}", node.id.index())))
    } else {
        String::new()
    };
    w.open(&format!(r#"<g{} class="{}">"#, id, classes));

    if let Some(edge) = &node.edge {
        write_connector(w, edge);
    }

    let subscript = if node.label.index.is_empty() {
        String::new()
    } else {
        format!(
            r#"<tspan class="{}" baseline-shift="sub" font-size="70%">{}</tspan>"#,
            config.name("index"),
            escape_xml(&node.label.index)
        )
    };
    w.line(&format!(
        r#"<text class="{}" x="{:.2}" y="{:.2}" text-anchor="middle">{}{}</text>"#,
        config.name("label"),
        node.label.position.x,
        node.label.position.y,
        escape_xml(&node.label.text),
        subscript
    ));

    if let Some(connector) = &node.head_connector {
        write_connector(w, connector);
    }
    if let Some(head) = &node.head {
        // Inline style beats the class rule when a trace flips the italics
        let style = if head.italic != tree_config.head_font.italic {
            let value = if head.italic { "italic" } else { "normal" };
            format!(r#" style="font-style: {}""#, value)
        } else {
            String::new()
        };
        w.line(&format!(
            r#"<text class="{}" x="{:.2}" y="{:.2}" text-anchor="middle"{}>{}</text>"#,
            config.name("head"),
            head.position.x,
            head.position.y,
            style,
            escape_xml(&head.text)
        ));
    }

    for child in &node.children {
        write_node(w, child, tree_config);
    }
    w.close("</g>");
}

fn write_connector(w: &mut SvgWriter, connector: &Connector) {
    let class = w.config.name("line");
    let markup = match connector {
        Connector::Line { from, to } => format!(
            r#"<line class="{}" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
            class, from.x, from.y, to.x, to.y
        ),
        Connector::Triangle { apex, left, right } => format!(
            r#"<polygon class="{}" points="{} {} {}"/>"#,
            class,
            coords(*left),
            coords(*right),
            coords(*apex)
        ),
    };
    w.line(&markup);
}

fn coords(p: Point) -> String {
    format!("{:.2},{:.2}", p.x, p.y)
}

/// CSS declarations for a font; sizes are in points
fn font_css(font: &FontConfig) -> String {
    format!(
        "font-family: {}; font-size: {}pt; fill: {}; font-weight: {}; font-style: {};",
        font.family,
        font.size,
        font.color,
        if font.bold { "bold" } else { "normal" },
        if font.italic { "italic" } else { "normal" }
    )
}
