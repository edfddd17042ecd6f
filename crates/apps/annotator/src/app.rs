use std::path::Path;

use catalog::{Catalog, CatalogError};
use foundation::{GERMANY_BOUNDS, GeoPoint, MapBounds, SurfaceRect};
use formats::{ExportError, SvgSurface, compose_document, decode_query, share_url};
use layers::{PlacedLabel, render_markers};
use scene::MarkerSet;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum AppError {
    /// The base-map asset could not be loaded. Fatal: without it the
    /// application stays inert and never renders.
    Asset(std::io::Error),
    Catalog(CatalogError),
    Export(ExportError),
    Write(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Asset(e) => write!(f, "base map load failed: {e}"),
            AppError::Catalog(e) => write!(f, "{e}"),
            AppError::Export(e) => write!(f, "export failed: {e}"),
            AppError::Write(e) => write!(f, "could not write export: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Asset(e) => Some(e),
            AppError::Catalog(e) => Some(e),
            AppError::Export(e) => Some(e),
            AppError::Write(e) => Some(e),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::Catalog(e)
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        AppError::Export(e)
    }
}

/// Explicit application state: catalog, selection, extents and the loaded
/// base-map document. All command entry points run to completion before the
/// next one is processed; there is no other lifecycle.
pub struct App {
    catalog: Catalog,
    markers: MarkerSet,
    bounds: MapBounds,
    viewport: SurfaceRect,
    base_svg: String,
}

impl App {
    /// Loads the base-map asset and builds the initial (empty) state.
    ///
    /// A load failure is returned as [`AppError::Asset`]; no recovery path
    /// exists past this point.
    pub fn load(base_map: &Path, catalog: Catalog) -> Result<Self, AppError> {
        let base_svg = std::fs::read_to_string(base_map).map_err(AppError::Asset)?;
        info!(path = %base_map.display(), bytes = base_svg.len(), "base map loaded");
        Ok(Self::with_base_svg(base_svg, catalog))
    }

    pub fn with_base_svg(base_svg: String, catalog: Catalog) -> Self {
        Self {
            catalog,
            markers: MarkerSet::new(),
            bounds: GERMANY_BOUNDS,
            viewport: SurfaceRect::new(0.0, 0.0, 600.0, 800.0),
            base_svg,
        }
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Adds the catalog entry named `name` to the selection.
    ///
    /// Unknown names and duplicates are no-ops.
    pub fn on_add(&mut self, name: &str) -> bool {
        let Some(point) = self.catalog.lookup(name) else {
            warn!(name, "not in catalog, ignoring add");
            return false;
        };
        let changed = self.markers.add(point.clone());
        if changed {
            debug!(name, "marker added");
        }
        changed
    }

    /// Removes `name` from the selection; unknown names are no-ops.
    pub fn on_remove(&mut self, name: &str) -> bool {
        let changed = self.markers.remove(name);
        if changed {
            debug!(name, "marker removed");
        }
        changed
    }

    /// Substring search over the catalog, for the autocomplete widget.
    pub fn on_search(&self, text: &str) -> Vec<&GeoPoint> {
        self.catalog.search(text)
    }

    /// Seeds the selection from a shareable query string. Runs after the
    /// asset load resolves; unknown and malformed entries are dropped.
    pub fn restore_query(&mut self, query: &str) {
        self.markers = decode_query(query, &self.catalog);
        info!(restored = self.markers.len(), "selection restored from query");
    }

    /// Shareable URL for the current selection.
    pub fn share_url(&self, base: &str) -> String {
        share_url(base, &self.markers)
    }

    /// Renders the current selection into a fresh SVG surface.
    pub fn render(&self) -> (SvgSurface, Vec<PlacedLabel>) {
        let mut surface = SvgSurface::default();
        let committed = render_markers(&mut surface, &self.markers, &self.bounds, &self.viewport);
        (surface, committed)
    }

    /// Full annotated document: base map plus the rendered layer.
    pub fn export(&self) -> Result<String, AppError> {
        let (surface, _) = self.render();
        Ok(compose_document(&self.base_svg, &surface)?)
    }
}
