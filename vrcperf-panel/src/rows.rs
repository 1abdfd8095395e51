//! Labeled metric rows

use crate::icons::IconSet;
use crate::layout::{PanelLayout, RowIcon};
use vrcperf_metrics::{classify, MeasuredStats, MetricKind, Platform};

/// One metric row of a rank panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledRow {
    pub label: &'static str,
    pub kind: MetricKind,
    pub value: u64,
    /// The selected object's own share, shown in parentheses
    pub selected: Option<u64>,
    /// Where the row splits between label and value
    pub factor: f32,
}

/// Value column text: `value/ceiling`, plus `(selected)` when given
pub fn format_value(value: u64, ceiling: u32, selected: Option<u64>) -> String {
    match selected {
        Some(selected) => format!("{}/{} ({})", value, ceiling, selected),
        None => format!("{}/{}", value, ceiling),
    }
}

/// Draw one row with its tier icon and ceiling
pub fn draw_labeled_row<L: PanelLayout + ?Sized>(
    layout: &mut L,
    icons: &IconSet,
    row: &LabeledRow,
    platform: Platform,
) {
    let classification = classify(row.kind, row.value, platform);
    let icon = RowIcon::Tier {
        tier: classification.tier,
        handle: icons.icon(classification.tier),
    };
    let value = format_value(row.value, classification.ceiling, row.selected);
    layout.split_row(row.label, icon, &value, row.factor);
}

/// Rows to show for a set of statistics, in display order
///
/// Metrics with a zero count are left out. Only triangles and materials
/// carry the selected share.
pub fn perf_rows(stats: &MeasuredStats, selected: Option<&MeasuredStats>) -> Vec<LabeledRow> {
    let rows = [
        ("Skinned Mesh:", MetricKind::SkinnedMeshCount, false, 0.8),
        ("Basic Mesh:", MetricKind::BasicMeshCount, false, 0.8),
        ("Tris:", MetricKind::Triangles, true, 0.3),
        ("Materials:", MetricKind::MaterialCount, true, 0.6),
        ("Bones:", MetricKind::BoneCount, false, 0.5),
    ];

    rows.into_iter()
        .filter(|&(_, kind, _, _)| stats.get(kind) > 0)
        .map(|(label, kind, shows_selected, factor)| LabeledRow {
            label,
            kind,
            value: stats.get(kind),
            selected: selected
                .filter(|_| shows_selected)
                .map(|s| s.get(kind)),
            factor,
        })
        .collect()
}

/// Draw every non-zero metric of `stats`
pub fn draw_perf_rows<L: PanelLayout + ?Sized>(
    layout: &mut L,
    icons: &IconSet,
    stats: &MeasuredStats,
    selected: Option<&MeasuredStats>,
    platform: Platform,
) {
    for row in perf_rows(stats, selected) {
        draw_labeled_row(layout, icons, &row, platform);
    }
}
