use foundation::{AnchorPosition, LabelSize, Rect};
use scene::RenderSurface;

/// Fixed id of the group element markers and labels are inserted into.
pub const ANNOTATION_LAYER_ID: &str = "annotations";

/// Filename the export artifact is offered under.
pub const EXPORT_FILENAME: &str = "annotated-map.svg";

const DEFAULT_FONT_SIZE: f64 = 14.0;
const MARKER_RADIUS: f64 = 4.0;

#[derive(Debug)]
pub enum ExportError {
    /// The base-map document has no closing `</svg>` tag.
    MissingSvgRoot,
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::MissingSvgRoot => write!(f, "base map is not a valid SVG document"),
        }
    }
}

impl std::error::Error for ExportError {}

/// `RenderSurface` that accumulates SVG markup for the annotation layer.
///
/// Text measurement is an estimate from font size and character count; the
/// placement engine handles any non-negative size, so a coarse estimate only
/// affects aesthetics, not correctness.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    font_size: f64,
    elements: Vec<String>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE)
    }
}

impl SvgSurface {
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            elements: Vec::new(),
        }
    }

    /// Markup of the annotation layer's children, one element per line.
    pub fn layer_markup(&self) -> String {
        self.elements.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl RenderSurface for SvgSurface {
    fn measure_text(&self, text: &str) -> LabelSize {
        let count = text.chars().count().max(1) as f64;
        LabelSize::new(self.font_size * 0.6 * count, self.font_size)
    }

    fn create_marker(&mut self, name: &str, anchor: AnchorPosition) {
        self.elements.push(format!(
            r##"<circle cx="{:.2}" cy="{:.2}" r="{MARKER_RADIUS}" fill="#c0392b" data-name="{}"/>"##,
            anchor.x,
            anchor.y,
            escape_attr(name)
        ));
    }

    fn create_label(&mut self, name: &str, bounds: Rect) {
        // Anchor the text middle on the rect's horizontal center; the
        // baseline sits near the rect bottom for the estimated ascent.
        let x = bounds.x + bounds.width / 2.0;
        let y = bounds.y + bounds.height * 0.8;
        self.elements.push(format!(
            r#"<text x="{x:.2}" y="{y:.2}" font-size="{:.1}" text-anchor="middle">{}</text>"#,
            self.font_size,
            escape_text(name)
        ));
    }

    fn clear_layer(&mut self) {
        self.elements.clear();
    }
}

/// Splices the annotation layer into the base-map document.
///
/// If the base map already carries a group with [`ANNOTATION_LAYER_ID`], its
/// content is replaced; otherwise the group is created just before the
/// closing `</svg>` tag. The result is a standalone SVG document.
pub fn compose_document(base_svg: &str, surface: &SvgSurface) -> Result<String, ExportError> {
    let layer = surface.layer_markup();
    let group = format!("<g id=\"{ANNOTATION_LAYER_ID}\">\n{layer}\n</g>");

    if let Some(span) = find_annotation_group(base_svg) {
        let mut out = String::with_capacity(base_svg.len() + group.len());
        out.push_str(&base_svg[..span.0]);
        out.push_str(&group);
        out.push_str(&base_svg[span.1..]);
        return Ok(out);
    }

    let close = base_svg
        .rfind("</svg>")
        .ok_or(ExportError::MissingSvgRoot)?;
    let mut out = String::with_capacity(base_svg.len() + group.len());
    out.push_str(&base_svg[..close]);
    out.push_str(&group);
    out.push('\n');
    out.push_str(&base_svg[close..]);
    Ok(out)
}

/// Byte span of an existing annotation group, open tag through `</g>`.
fn find_annotation_group(base_svg: &str) -> Option<(usize, usize)> {
    let id_attr = format!("id=\"{ANNOTATION_LAYER_ID}\"");
    let attr_at = base_svg.find(&id_attr)?;
    let open_at = base_svg[..attr_at].rfind("<g")?;
    let close_rel = base_svg[attr_at..].find("</g>")?;
    Some((open_at, attr_at + close_rel + "</g>".len()))
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}
