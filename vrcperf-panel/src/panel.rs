//! Desktop and mobile rank panels

use crate::icons::IconSet;
use crate::layout::{PanelLayout, RowIcon};
use crate::rows::draw_perf_rows;
use vrcperf_core::{ObjectId, SceneGraph};
use vrcperf_metrics::{
    aggregate, resolve, AggregateTarget, MeasuredStats, Platform, Selection, SelectionHeader,
    SelectionResult,
};

/// A sidebar panel ranking the selection for one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankPanel {
    pub platform: Platform,
}

impl RankPanel {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Panel title
    pub fn label(&self) -> &'static str {
        match self.platform {
            Platform::Desktop => "VRChat Avatar Rank (PC)",
            Platform::Mobile => "VRChat Avatar Rank (Mobile)",
        }
    }

    /// Host registration id
    pub fn id(&self) -> &'static str {
        match self.platform {
            Platform::Desktop => "PT_VRCAR",
            Platform::Mobile => "PT_VRCARQ",
        }
    }

    /// Draw the panel body for the current selection
    ///
    /// Selection problems are drawn as a single text label.
    pub fn draw<S, L>(
        &self,
        scene: &S,
        selection: &Selection,
        icons: &IconSet,
        layout: &mut L,
        show_selected: bool,
    ) where
        S: SceneGraph + ?Sized,
        L: PanelLayout + ?Sized,
    {
        let (stats, selected) = match measure(scene, selection, show_selected) {
            Ok(measured) => measured,
            Err(e) => {
                log::debug!("{}: {}", self.label(), e);
                layout.label(&e.user_message(), RowIcon::None);
                return;
            }
        };

        if let Some(header) = SelectionHeader::for_selection(scene, selection) {
            layout.label(&header.name, RowIcon::Header(header.icon));
        }
        draw_perf_rows(layout, icons, &stats, selected.as_ref(), self.platform);
    }
}

/// Measure the selection, plus the active mesh's own share when it is part
/// of a larger target
///
/// The share is the active mesh's own triangle and material count. The
/// Blender add-on passes the rig total itself as the "(selected)" value,
/// which always repeats the number next to it, so that value is not
/// reproduced here.
pub fn measure<S: SceneGraph + ?Sized>(
    scene: &S,
    selection: &Selection,
    with_selected: bool,
) -> SelectionResult<(MeasuredStats, Option<MeasuredStats>)> {
    let target = resolve(scene, selection)?;
    let stats = aggregate(scene, &target)?;

    let selected = match (selection, &target) {
        (_, AggregateTarget::SingleObject(_) | AggregateTarget::MultiSelect(_)) => None,
        (Selection::Objects { active, .. }, _) if with_selected && is_mesh(scene, *active) => {
            Some(aggregate(scene, &AggregateTarget::SingleObject(*active))?)
        }
        _ => None,
    };
    Ok((stats, selected))
}

fn is_mesh<S: SceneGraph + ?Sized>(scene: &S, id: ObjectId) -> bool {
    scene.object(id).is_some_and(|object| object.is_mesh())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TextLayout;
    use vrcperf_core::{ArmatureData, MaterialSlot, MeshData, Modifier, ObjectKind, Scene};

    fn avatar() -> (Scene, ObjectId, ObjectId) {
        let mut scene = Scene::new();
        let mut skeleton = ArmatureData::new();
        for i in 0..80 {
            skeleton.add_bone(format!("Bone{}", i), None);
        }
        let rig = scene.add_object("Armature", ObjectKind::Armature(skeleton), None);

        let mut body = MeshData::new();
        for _ in 0..100 {
            body.add_polygon(vec![0, 1, 2, 3]);
        }
        body.add_material_slot(MaterialSlot::named("Skin"));
        body.add_modifier(Modifier::armature("Armature", Some(rig)));
        let body = scene.add_object("Body", ObjectKind::Mesh(body), Some(rig));

        let mut hat = MeshData::new();
        hat.add_polygon(vec![0, 1, 2]);
        hat.add_material_slot(MaterialSlot::named("Hat"));
        scene.add_object("Hat", ObjectKind::Mesh(hat), Some(rig));
        (scene, rig, body)
    }

    #[test]
    fn test_panel_ids() {
        assert_eq!(RankPanel::new(Platform::Desktop).id(), "PT_VRCAR");
        assert_eq!(RankPanel::new(Platform::Mobile).id(), "PT_VRCARQ");
        assert_eq!(RankPanel::new(Platform::Mobile).label(), "VRChat Avatar Rank (Mobile)");
    }

    #[test]
    fn test_measure_includes_active_mesh_share() {
        let (scene, _, body) = avatar();
        let (stats, selected) = measure(&scene, &Selection::object(body), true).unwrap();
        assert_eq!(stats.total_tri_count, 201);
        assert_eq!(stats.bone_count, 80);
        assert_eq!(selected.unwrap().total_tri_count, 200);

        let (_, selected) = measure(&scene, &Selection::object(body), false).unwrap();
        assert!(selected.is_none());
    }

    #[test]
    fn test_measure_armature_has_no_share() {
        let (scene, rig, _) = avatar();
        let (_, selected) = measure(&scene, &Selection::object(rig), true).unwrap();
        assert!(selected.is_none());
    }

    #[test]
    fn test_draw_desktop_panel() {
        let (scene, _, body) = avatar();
        let icons = IconSet::generated(4);
        let mut layout = TextLayout::new(40);
        let selection = Selection::object(body);
        RankPanel::new(Platform::Desktop).draw(&scene, &selection, &icons, &mut layout, true);

        let lines = layout.lines();
        assert_eq!(lines[0], "<MESH_CUBE> Body");
        assert!(lines[1].starts_with("[Excellent] Skinned Mesh:") && lines[1].ends_with("1/1"));
        assert!(lines[2].starts_with("[Excellent] Basic Mesh:") && lines[2].ends_with("1/4"));
        assert!(lines[3].starts_with("[Excellent] Tris:") && lines[3].ends_with("201/32000 (200)"));
        assert!(lines[4].starts_with("[Excellent] Materials:") && lines[4].ends_with("2/4 (1)"));
        assert!(lines[5].starts_with("[Good] Bones:") && lines[5].ends_with("80/150"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_draw_nothing_selected() {
        let (scene, ..) = avatar();
        let icons = IconSet::generated(4);
        let mut layout = TextLayout::new(40);
        let selection = Selection::Nothing;
        RankPanel::new(Platform::Mobile).draw(&scene, &selection, &icons, &mut layout, true);
        assert_eq!(layout.lines(), &["Nothing selected."]);
    }

    #[test]
    fn test_draw_unsupported_selection() {
        let (scene, rig, body) = avatar();
        let icons = IconSet::generated(4);
        let mut layout = TextLayout::new(40);
        let selection = Selection::objects(vec![body, rig]);
        RankPanel::new(Platform::Mobile).draw(&scene, &selection, &icons, &mut layout, true);
        assert_eq!(layout.lines().len(), 1);
        assert!(layout.lines()[0].starts_with("Unsupported selection: 'Armature' is not a mesh"));
    }
}
