//! Utility functions

use std::path::PathBuf;

// Square "n" mark used for the in-app logo and window/taskbar icon
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><rect width="256" height="256" rx="28" fill="#dc2626"/><path fill="#fff" d="M64 64h128v128h-48V96h-32v96H64z"/></svg>"##;

/// Rasterize the logo SVG to a square image at the given size.
pub fn rasterize_logo(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("npm Explorer")
}

/// Turn a manifest repository URL into something a browser can open:
/// drop the `git+` prefix and the `.git` suffix.
pub fn normalize_repo_url(url: &str) -> String {
    let url = url.strip_prefix("git+").unwrap_or(url);
    let url = url.strip_suffix(".git").unwrap_or(url);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_repo_url_strips_git_wrapping() {
        assert_eq!(
            normalize_repo_url("git+https://github.com/serde-rs/json.git"),
            "https://github.com/serde-rs/json"
        );
        assert_eq!(
            normalize_repo_url("https://github.com/serde-rs/json"),
            "https://github.com/serde-rs/json"
        );
    }
}
