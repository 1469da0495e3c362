//! Plain-text preview and per-section statistics for an offset table.
//!
//! Used by the CLI to show a computation summary without exporting.

use std::fmt::Write as _;

use crate::engine::ComputedHull;
use crate::table::OffsetTable;

/// Half-beam range and point count for one station.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionStats {
    pub section: String,
    pub points: usize,
    pub y_min: f64,
    pub y_max: f64,
}

/// Per-section statistics in table order.
pub fn section_stats(table: &OffsetTable) -> Vec<SectionStats> {
    let mut stats: Vec<SectionStats> = Vec::new();
    for point in table {
        match stats.last_mut() {
            Some(last) if last.section == point.section => {
                last.points += 1;
                last.y_min = last.y_min.min(point.y);
                last.y_max = last.y_max.max(point.y);
            }
            _ => stats.push(SectionStats {
                section: point.section.clone(),
                points: 1,
                y_min: point.y,
                y_max: point.y,
            }),
        }
    }
    stats
}

/// Render a human-readable summary: dimensions, first/last points, and
/// per-section half-beam ranges.
pub fn render(hull: &ComputedHull, preview_rows: usize) -> String {
    let dims = &hull.dimensions;
    let table = &hull.table;
    let mut out = String::new();

    writeln!(out, "Hull dimensions (m):").unwrap();
    writeln!(
        out,
        "  Loa={:.3}  Lwl={:.3}  Boa={:.3}  Bg={:.3}  Tc={:.3}",
        dims.loa, dims.lwl, dims.boa, dims.bg, dims.tc
    )
    .unwrap();
    writeln!(
        out,
        "Offset points: {} ({} sections)\n",
        table.len(),
        table.station_count()
    )
    .unwrap();

    writeln!(out, "{:<10} {:>10} {:>10} {:>10}", "Section", "X(cm)", "Y(cm)", "Z(cm)").unwrap();
    let points = table.points();
    let n = preview_rows.min(points.len());
    for point in &points[..n] {
        writeln!(
            out,
            "{:<10} {:>10.2} {:>10.2} {:>10.2}",
            point.section, point.x, point.y, point.z
        )
        .unwrap();
    }
    if points.len() > 2 * n {
        writeln!(out, "... ({} more points) ...", points.len() - 2 * n).unwrap();
    }
    let tail_start = points.len().saturating_sub(n).max(n);
    for point in &points[tail_start.min(points.len())..] {
        writeln!(
            out,
            "{:<10} {:>10.2} {:>10.2} {:>10.2}",
            point.section, point.x, point.y, point.z
        )
        .unwrap();
    }

    writeln!(out, "\nPer-section half-beam range (cm):").unwrap();
    for s in section_stats(table) {
        writeln!(
            out,
            "  {:<6} {:>3} pts  y: {:>8.2} .. {:>8.2}",
            s.section, s.points, s.y_min, s.y_max
        )
        .unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;
    use crate::params::ParameterSet;

    #[test]
    fn stats_cover_every_section_once() {
        let hull = compute(&ParameterSet::new()).unwrap();
        let stats = section_stats(&hull.table);
        assert_eq!(stats.len(), 24);
        assert!(stats.iter().all(|s| s.points == 10));
    }

    #[test]
    fn stats_track_min_and_max() {
        let hull = compute(&ParameterSet::new()).unwrap();
        let c0 = &section_stats(&hull.table)[1];
        assert_eq!(c0.section, "C0");
        assert_eq!(c0.y_max, 285.48);
        assert!(c0.y_min < c0.y_max);
    }

    #[test]
    fn render_includes_counts_and_header() {
        let hull = compute(&ParameterSet::new()).unwrap();
        let text = render(&hull, 5);
        assert!(text.contains("Offset points: 240 (24 sections)"));
        assert!(text.contains("Section"));
        assert!(text.contains("C0"));
        assert!(text.contains("Cav2"));
    }
}
