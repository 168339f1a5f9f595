//! Helper functions for the demo host

use std::path::{Path, PathBuf};

use anyhow::Context;
use circle_indicator::AttributeSet;

/// Width of one page in the pager
pub const PAGE_WIDTH: f32 = 480.0;

/// Height of one page in the pager
pub const PAGE_HEIGHT: f32 = 280.0;

/// Upper bound for the add-page button
pub const MAX_PAGES: u32 = 12;

/// Scrollable id of the pager
pub const PAGER_ID: &str = "pager";

/// Page whose left edge is closest to the scroll offset
pub fn page_for_offset(offset: f32, page_width: f32, page_count: u32) -> i32 {
    if page_count == 0 || page_width <= 0.0 {
        return 0;
    }
    let page = (offset / page_width).round() as i32;
    page.clamp(0, page_count as i32 - 1)
}

/// Relative scroll position (0.0 to 1.0) that brings `page` into view
pub fn relative_offset_for_page(page: i32, page_count: u32) -> f32 {
    if page_count <= 1 {
        return 0.0;
    }
    (page as f32 / (page_count - 1) as f32).clamp(0.0, 1.0)
}

/// Total content width for `page_count` pages
pub fn content_width(page_count: u32) -> f32 {
    page_count as f32 * PAGE_WIDTH
}

/// Where the indicator attributes are read from
///
/// The first command line argument wins; otherwise `indicator.json` in the
/// user config directory. The flag tells whether the path was given explicitly.
pub fn attributes_path() -> Option<(PathBuf, bool)> {
    if let Some(arg) = std::env::args_os().nth(1) {
        return Some((PathBuf::from(arg), true));
    }
    directories::ProjectDirs::from("com", "circle-indicator", "CircleIndicator")
        .map(|dirs| (dirs.config_dir().join("indicator.json"), false))
}

/// Read an attribute file
pub fn load_attributes(path: &Path) -> anyhow::Result<AttributeSet> {
    AttributeSet::load_from_file(path)
        .with_context(|| format!("Failed to load indicator attributes from {}", path.display()))
}

/// Resolve and load the attribute set, falling back to an empty one
pub fn startup_attributes() -> AttributeSet {
    let Some((path, explicit)) = attributes_path() else {
        tracing::debug!("No config directory, using default indicator attributes");
        return AttributeSet::new();
    };

    if !explicit && !path.exists() {
        tracing::debug!("No attribute file at {}, using defaults", path.display());
        return AttributeSet::new();
    }

    match load_attributes(&path) {
        Ok(attrs) => {
            tracing::info!("Loaded indicator attributes from {}", path.display());
            attrs
        }
        Err(e) => {
            tracing::warn!("{:#}", e);
            AttributeSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_for_offset_rounds_to_nearest() {
        assert_eq!(page_for_offset(0.0, 480.0, 5), 0);
        assert_eq!(page_for_offset(239.0, 480.0, 5), 0);
        assert_eq!(page_for_offset(241.0, 480.0, 5), 1);
        assert_eq!(page_for_offset(960.0, 480.0, 5), 2);
    }

    #[test]
    fn test_page_for_offset_clamps() {
        assert_eq!(page_for_offset(-100.0, 480.0, 5), 0);
        assert_eq!(page_for_offset(10_000.0, 480.0, 5), 4);
        assert_eq!(page_for_offset(100.0, 480.0, 0), 0);
        assert_eq!(page_for_offset(100.0, 0.0, 3), 0);
    }

    #[test]
    fn test_relative_offset_for_page() {
        assert_eq!(relative_offset_for_page(0, 5), 0.0);
        assert_eq!(relative_offset_for_page(2, 5), 0.5);
        assert_eq!(relative_offset_for_page(4, 5), 1.0);
        assert_eq!(relative_offset_for_page(3, 1), 0.0);
    }

    #[test]
    fn test_load_attributes_reports_path() {
        let err = load_attributes(Path::new("/nonexistent/indicator.json"))
            .expect_err("missing file");
        assert!(format!("{:#}", err).contains("/nonexistent/indicator.json"));
    }
}
