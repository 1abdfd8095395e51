//! Machine-readable rank report

use serde::Serialize;
use vrcperf_core::SceneGraph;
use vrcperf_metrics::{MetricKind, Platform, Selection, Tier};
use vrcperf_panel::measure;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricReport {
    pub metric: &'static str,
    pub value: u64,
    pub tier: Tier,
    pub ceiling: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformReport {
    pub platform: Platform,
    /// Worst tier over all metrics, absent when the selection is not rankable
    pub overall: Option<Tier>,
    pub metrics: Vec<MetricReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One report per platform for the current selection
pub fn build_reports<S: SceneGraph + ?Sized>(
    scene: &S,
    selection: &Selection,
    platforms: &[Platform],
) -> Vec<PlatformReport> {
    let measured = measure(scene, selection, false);
    platforms
        .iter()
        .map(|&platform| match &measured {
            Ok((stats, _)) => PlatformReport {
                platform,
                overall: Some(stats.overall_tier(platform)),
                metrics: MetricKind::ALL
                    .iter()
                    .map(|&kind| {
                        let classification = stats.classify(kind, platform);
                        MetricReport {
                            metric: kind.name(),
                            value: stats.get(kind),
                            tier: classification.tier,
                            ceiling: classification.ceiling,
                        }
                    })
                    .collect(),
                error: None,
            },
            Err(e) => PlatformReport {
                platform,
                overall: None,
                metrics: Vec::new(),
                error: Some(e.user_message()),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrcperf_core::{MeshData, ObjectKind, Scene};

    #[test]
    fn test_reports_per_platform() {
        let mut scene = Scene::new();
        let mut mesh = MeshData::new();
        for _ in 0..5_000 {
            mesh.add_polygon(vec![0, 1, 2, 3]);
        }
        let cube = scene.add_object("Cube", ObjectKind::Mesh(mesh), None);

        let reports = build_reports(&scene, &Selection::object(cube), &Platform::ALL);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].overall, Some(Tier::Excellent));
        assert_eq!(reports[1].overall, Some(Tier::Good));

        let tris = reports[1].metrics.iter().find(|m| m.metric == "Tris").unwrap();
        assert_eq!(tris.value, 10_000);
        assert_eq!(tris.ceiling, 10_000);
        assert_eq!(tris.tier, Tier::Good);
    }

    #[test]
    fn test_report_carries_selection_error() {
        let scene = Scene::new();
        let reports = build_reports(&scene, &Selection::Nothing, &[Platform::Mobile]);
        assert_eq!(reports[0].error.as_deref(), Some("Nothing selected."));
        assert!(reports[0].overall.is_none());
        assert!(reports[0].metrics.is_empty());
    }
}
