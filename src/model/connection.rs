use std::collections::HashMap;

use crate::{
    animation::ease::{has_arrived, step_point, step_scalar},
    foundation::core::{Point, Vec2},
    model::{
        geometry::PlotGeometry,
        settings::Settings,
        swatch::{Swatch, SwatchId},
    },
};

/// Lookup from swatch id to the live swatch, rebuilt every frame.
///
/// Connections hold ids rather than references because the swatch collection is reordered each
/// frame.
pub struct SwatchIndex<'a> {
    by_id: HashMap<&'a SwatchId, &'a Swatch>,
}

impl<'a> SwatchIndex<'a> {
    /// Index the current swatch collection.
    pub fn new(swatches: &'a [Swatch]) -> Self {
        Self {
            by_id: swatches.iter().map(|s| (&s.id, s)).collect(),
        }
    }

    /// Resolve an id against the collection this index was built from.
    pub fn get(&self, id: &SwatchId) -> Option<&'a Swatch> {
        self.by_id.get(id).copied()
    }
}

/// A line from a connection's center to one of its swatches.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionLine {
    /// Swatch this line points at, resolved through a [`SwatchIndex`].
    pub swatch: SwatchId,
    /// Current far end; unset until the first update.
    pub end: Option<Point>,
    /// Far end this frame is easing toward.
    pub dest_end: Option<Point>,
}

/// Grouping marker for every swatch of one screenshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    /// Screenshot whose swatches this connection groups.
    pub screenshot: String,
    /// Current center; unset until the first update.
    pub position: Option<Point>,
    /// Center this frame is easing toward.
    pub dest_position: Option<Point>,
    /// Current radius; unset until the first update.
    pub radius: Option<f64>,
    /// Radius this frame is easing toward.
    pub dest_radius: f64,
    /// One line per swatch, in palette rank order.
    pub lines: Vec<ConnectionLine>,
}

impl Connection {
    fn new(screenshot: String) -> Self {
        Self {
            screenshot,
            position: None,
            dest_position: None,
            radius: None,
            dest_radius: 0.0,
            lines: Vec::new(),
        }
    }

    /// Recompute destinations from the swatches' current positions and step toward them.
    ///
    /// The center heads for the centroid of the visible swatches and holds still when none are
    /// visible. Hidden lines retract into the center.
    pub fn advance(&mut self, index: &SwatchIndex<'_>, settings: &Settings, geometry: &PlotGeometry) {
        let resolved: Vec<Option<&Swatch>> =
            self.lines.iter().map(|line| index.get(&line.swatch)).collect();

        let visible: Vec<Point> = resolved
            .iter()
            .flatten()
            .filter(|s| settings.is_visible(s.amount))
            .filter_map(|s| s.current_position())
            .collect();

        let dest_position = centroid(&visible)
            .or(self.position)
            .unwrap_or(geometry.center);
        let position = step_point(self.position, dest_position);
        self.dest_position = Some(dest_position);
        self.position = Some(position);

        self.dest_radius = if settings.show_color_connections && !visible.is_empty() {
            settings.screenshot_circle_size
        } else {
            0.0
        };

        for (line, swatch) in self.lines.iter_mut().zip(resolved) {
            if swatch.is_none() {
                tracing::trace!(swatch = %line.swatch, "connection line lost its swatch");
            }
            let shown = swatch
                .filter(|s| settings.show_color_connections && settings.is_visible(s.amount))
                .and_then(Swatch::current_position);
            let dest_end = shown.unwrap_or(position);
            line.dest_end = Some(dest_end);
            line.end = Some(step_point(line.end, dest_end));
        }

        self.radius = Some(step_scalar(self.radius, self.dest_radius));
    }

    /// Whether the center, the radius, or any line end is still short of its destination.
    pub fn is_animating(&self) -> bool {
        let position_settled = self
            .dest_position
            .is_some_and(|dest| has_arrived(self.position, dest));
        let lines_settled = self.lines.iter().all(|line| {
            line.dest_end
                .is_some_and(|dest| has_arrived(line.end, dest))
        });
        !position_settled || !has_arrived(self.radius, self.dest_radius) || !lines_settled
    }

    /// Ids of the swatches this connection groups.
    pub fn swatch_ids(&self) -> impl Iterator<Item = &SwatchId> {
        self.lines.iter().map(|line| &line.swatch)
    }
}

/// Group swatches by screenshot, one connection per screenshot in first-seen order.
pub fn build_connections(swatches: &[Swatch]) -> Vec<Connection> {
    let mut slot_by_screenshot: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<Connection> = Vec::new();
    for swatch in swatches {
        let slot = *slot_by_screenshot
            .entry(swatch.screenshot.as_str())
            .or_insert_with(|| {
                out.push(Connection::new(swatch.screenshot.clone()));
                out.len() - 1
            });
        out[slot].lines.push(ConnectionLine {
            swatch: swatch.id.clone(),
            end: None,
            dest_end: None,
        });
    }
    out
}

/// Advance every connection one frame against the already-updated swatches.
pub fn update_connections(
    connections: &mut [Connection],
    swatches: &[Swatch],
    settings: &Settings,
    geometry: &PlotGeometry,
) {
    let index = SwatchIndex::new(swatches);
    for connection in connections.iter_mut() {
        connection.advance(&index, settings, geometry);
    }
}

/// Whether any connection is still moving.
pub fn any_connection_animating(connections: &[Connection]) -> bool {
    connections.iter().any(Connection::is_animating)
}

fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    Some((sum / points.len() as f64).to_point())
}

#[cfg(test)]
#[path = "../../tests/unit/model/connection.rs"]
mod tests;
