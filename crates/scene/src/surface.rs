use foundation::{AnchorPosition, LabelSize, Rect};

/// Capability interface over the vector-graphics backend.
///
/// The render pass drives this trait and never touches the backend
/// directly, so it works the same against a retained scene graph, an
/// SVG writer, or a recording stub in tests.
pub trait RenderSurface {
    /// Footprint of `text` as the backend would render it.
    ///
    /// Exact values are backend-dependent; placement must stay correct for
    /// any non-negative width and height.
    fn measure_text(&self, text: &str) -> LabelSize;

    /// Emits the marker glyph at its projected anchor.
    fn create_marker(&mut self, name: &str, anchor: AnchorPosition);

    /// Emits the label for `name` inside `bounds`.
    fn create_label(&mut self, name: &str, bounds: Rect);

    /// Removes all previously emitted markers and labels.
    fn clear_layer(&mut self);
}
