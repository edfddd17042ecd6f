use foundation::{AnchorPosition, GeoPoint, MapBounds, SurfaceRect};

/// Projects a geographic coordinate onto the rendering surface.
///
/// Longitude maps linearly to the horizontal axis; latitude maps linearly to
/// the vertical axis and is inverted, since latitude grows northward while
/// surface y grows downward. Points outside `bounds` project outside the
/// visible surface, which is not an error.
pub fn project(point: &GeoPoint, bounds: &MapBounds, surface: &SurfaceRect) -> AnchorPosition {
    let x = surface.x + (point.lon - bounds.min_lon) / bounds.lon_span() * surface.width;
    let y = surface.y + surface.height
        - (point.lat - bounds.min_lat) / bounds.lat_span() * surface.height;
    AnchorPosition::new(x, y)
}
