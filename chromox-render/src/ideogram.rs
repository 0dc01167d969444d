/*!
# Ideogram Assembly

Composes the chromosome diagram from its layers in a fixed paint order:
frame, title, backdrop, clipped region layers, outline, variant markers,
scale axis, region legend, variant legend.

Every layer is an owned SVG node; the document is a single fold over them.
*/

use chromox_core::{ChromosomeAnnotation, CoordinateMapper, IdeogramResult, RenderOptions, VariantMarker};
use svg::node::element::{Rectangle, Text};
use svg::node::Comment;
use svg::{Document, Node};

use crate::axis::scale_axis;
use crate::layout::*;
use crate::legend::{region_legend, variant_legend};
use crate::markers::variant_markers;
use crate::regions::{region_layers, silhouette};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Stateless ideogram renderer; one instance may serve any number of calls.
#[derive(Debug, Clone, Default)]
pub struct IdeogramRenderer {
    options: RenderOptions,
}

impl IdeogramRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.options.title = title.into();
        self
    }

    /// Render the annotation and variants into a complete SVG document.
    pub fn render(&self, annotation: &ChromosomeAnnotation, variants: &[VariantMarker]) -> IdeogramResult<String> {
        let mapper = CoordinateMapper::new(annotation.length, CANVAS_WIDTH, MARGIN)?;
        if !self.options.show_all_regions {
            log::debug!("show_all_regions is reserved; drawing the full layer order");
        }

        let mut fragments: Vec<Box<dyn Node>> = Vec::with_capacity(10);
        if let Some(comment) = &self.options.provenance_comment {
            fragments.push(Box::new(Comment::new(comment_text(comment))));
        }
        fragments.push(Box::new(background()));
        fragments.push(Box::new(title(&self.options.title)));
        fragments.push(Box::new(silhouette(&mapper).set("class", "chromosome-backdrop").set("fill", CHROM_FILL)));
        fragments.push(Box::new(region_layers(annotation, &mapper)));
        fragments.push(Box::new(
            silhouette(&mapper)
                .set("class", "chromosome-outline")
                .set("fill", "none")
                .set("stroke", CHROM_STROKE)
                .set("stroke-width", 1.5),
        ));
        fragments.push(Box::new(variant_markers(variants, &mapper)));
        fragments.push(Box::new(scale_axis(&mapper)));
        fragments.push(Box::new(region_legend(annotation)));
        fragments.push(Box::new(variant_legend()));

        let document = fragments.into_iter().fold(frame(), |doc, fragment| doc.add(fragment));
        Ok(format!("{}\n{}\n", XML_DECLARATION, document))
    }
}

/// Render with the given options; see [`IdeogramRenderer::render`].
pub fn render_ideogram(
    annotation: &ChromosomeAnnotation,
    variants: &[VariantMarker],
    options: &RenderOptions,
) -> IdeogramResult<String> {
    IdeogramRenderer::new(options.clone()).render(annotation, variants)
}

/// XML comments may not contain `--` or end in `-`.
fn comment_text(raw: &str) -> String {
    let mut text = raw.to_string();
    while text.contains("--") {
        text = text.replace("--", "- -");
    }
    text.trim_end_matches('-').to_string()
}

fn frame() -> Document {
    Document::new()
        .set("width", CANVAS_WIDTH)
        .set("height", CANVAS_HEIGHT)
        .set("viewBox", (0, 0, CANVAS_WIDTH, CANVAS_HEIGHT))
}

fn background() -> Rectangle {
    Rectangle::new()
        .set("width", CANVAS_WIDTH)
        .set("height", CANVAS_HEIGHT)
        .set("fill", BACKGROUND_COLOR)
}

fn title(text: &str) -> Text {
    Text::new(text)
        .set("class", "ideogram-title")
        .set("x", CANVAS_WIDTH / 2.0)
        .set("y", TITLE_Y)
        .set("font-family", FONT_FAMILY)
        .set("font-size", format!("{}px", TITLE_FONT_SIZE))
        .set("font-weight", "bold")
        .set("text-anchor", "middle")
}
