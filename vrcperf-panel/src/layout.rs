//! Write-only panel layout
//!
//! Hosts implement [`PanelLayout`] over their own UI toolkit. [`TextLayout`]
//! renders the same calls to plain text.

use crate::icons::IconHandle;
use vrcperf_metrics::{HeaderIcon, Tier};

/// Icon drawn at the start of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIcon {
    /// A tier icon from the extension's icon set
    Tier { tier: Tier, handle: IconHandle },
    /// A built-in host icon for the selection header
    Header(HeaderIcon),
    None,
}

/// Target the panels draw into
pub trait PanelLayout {
    /// A full-width text label
    fn label(&mut self, text: &str, icon: RowIcon);

    /// A row split at `factor` of the width: label on the left, value right-aligned
    fn split_row(&mut self, label: &str, icon: RowIcon, value: &str, factor: f32);

    /// Vertical space between panels
    fn separator(&mut self) {}
}

/// Renders panels to fixed-width text lines
#[derive(Debug, Clone)]
pub struct TextLayout {
    width: usize,
    lines: Vec<String>,
}

impl TextLayout {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_string(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    fn icon_prefix(icon: RowIcon) -> String {
        match icon {
            RowIcon::Tier { tier, .. } => format!("[{}] ", tier.label()),
            RowIcon::Header(HeaderIcon::None) | RowIcon::None => String::new(),
            RowIcon::Header(header) => format!("<{}> ", header.host_name()),
        }
    }
}

impl Default for TextLayout {
    fn default() -> Self {
        Self::new(40)
    }
}

impl PanelLayout for TextLayout {
    fn label(&mut self, text: &str, icon: RowIcon) {
        self.lines.push(format!("{}{}", Self::icon_prefix(icon), text));
    }

    fn split_row(&mut self, label: &str, icon: RowIcon, value: &str, factor: f32) {
        let left = format!("{}{}", Self::icon_prefix(icon), label);
        let split = (self.width as f32 * factor.clamp(0.0, 1.0)).round() as usize;
        // The value column never shrinks below the value itself.
        let right_width = self.width.saturating_sub(split).max(value.len());
        let left_width = self.width.saturating_sub(right_width).max(left.len() + 1);
        self.lines.push(format!("{:<left_width$}{:>right_width$}", left, value));
    }

    fn separator(&mut self) {
        self.lines.push(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_row_right_aligns_value() {
        let mut layout = TextLayout::new(30);
        layout.split_row("Bones:", RowIcon::None, "3/75", 0.5);
        let line = &layout.lines()[0];
        assert_eq!(line.len(), 30);
        assert!(line.starts_with("Bones:"));
        assert!(line.ends_with("3/75"));
    }

    #[test]
    fn test_split_row_never_truncates() {
        let mut layout = TextLayout::new(10);
        layout.split_row(
            "Tris:",
            RowIcon::Tier { tier: Tier::VeryPoor, handle: IconHandle(5) },
            "250000/70000 (250000)",
            0.3,
        );
        let line = &layout.lines()[0];
        assert!(line.starts_with("[Very Poor] Tris: "));
        assert!(line.ends_with("250000/70000 (250000)"));
    }

    #[test]
    fn test_labels_and_header_icons() {
        let mut layout = TextLayout::default();
        layout.label("Body", RowIcon::Header(HeaderIcon::Mesh));
        layout.label("Nothing selected.", RowIcon::None);
        layout.separator();
        assert_eq!(layout.lines(), &["<MESH_CUBE> Body", "Nothing selected.", ""]);
        assert!(layout.into_string().ends_with("\n\n"));
    }
}
