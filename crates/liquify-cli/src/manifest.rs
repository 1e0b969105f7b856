//! Manifest builders
//!
//! Three read-only scans over the filesystem state left by the external
//! build step. Each builder is a pure function of the directories it is
//! handed; ordering follows directory traversal and is not
//! contract-significant.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use liquify_router::{compile, RoutePattern};
use walkdir::WalkDir;

/// One built client file and where it lands in the theme.
#[derive(Debug, Clone)]
pub struct FileManifestEntry {
    /// Source path in the build output.
    pub from: PathBuf,
    /// Destination under `theme/assets/`.
    pub to: PathBuf,
    /// Route-like pattern string derived from page chunks.
    pub pattern: String,
    /// Sanitized asset identifier: brackets removed, separators flattened.
    pub asset: String,
}

/// One prerendered HTML file and its normalized request path.
#[derive(Debug, Clone)]
pub struct PrerenderedEntry {
    pub original: PathBuf,
    /// Request path: leading slash, `.html` and a trailing `/index` segment
    /// stripped, empty result normalized to `/`.
    pub path: String,
}

/// One route definition file with its compiled pattern.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub original: PathBuf,
    /// Pattern string as derived from the file path; keys the template
    /// mapping table.
    pub pattern: String,
    pub route: RoutePattern,
}

fn relative_str(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Scans the built client tree under `<out>/_app`.
pub fn file_manifest(out: &Path, route_ext: &str) -> Result<Vec<FileManifestEntry>> {
    let app_dir = out.join("_app");
    let assets_dir = out.join("theme").join("assets");

    let mut entries = Vec::new();
    for entry in WalkDir::new(&app_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let from = entry.path().to_path_buf();

        let in_app = relative_str(&from, &app_dir);
        let page = in_app.strip_prefix("pages/").unwrap_or(in_app.as_str());
        let pattern = match page.find(route_ext) {
            Some(i) => page[..i].to_string(),
            None => page.to_string(),
        };

        // The platform rejects asset names containing brackets.
        let asset = relative_str(&from, out)
            .replace(['[', ']'], "")
            .replace('/', "_");
        let to = assets_dir.join(format!("{}.liquid", asset));

        entries.push(FileManifestEntry {
            from,
            to,
            pattern,
            asset,
        });
    }
    Ok(entries)
}

/// Scans route definition files and compiles each pattern.
pub fn route_manifest(routes_dir: &Path, route_ext: &str) -> Result<Vec<RouteEntry>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(routes_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let original = entry.path().to_path_buf();

        let rel = relative_str(&original, routes_dir);
        let pattern = rel.strip_suffix(route_ext).unwrap_or(rel.as_str()).to_string();
        let route = compile(&pattern, false)
            .with_context(|| format!("Invalid route pattern '{}'", pattern))?;

        entries.push(RouteEntry {
            original,
            pattern,
            route,
        });
    }
    Ok(entries)
}

/// Scans prerendered HTML output into normalized request paths.
pub fn prerendered_manifest(dir: &Path) -> Result<Vec<PrerenderedEntry>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let original = entry.path().to_path_buf();

        let mut path = format!("/{}", relative_str(&original, dir));
        if let Some(stripped) = path.strip_suffix(".html") {
            path = stripped.to_string();
        }
        if let Some(stripped) = path.strip_suffix("/index") {
            path = stripped.to_string();
        }
        if path.is_empty() {
            path = "/".to_string();
        }

        entries.push(PrerenderedEntry { original, path });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prerendered_paths_are_normalized() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("products")).unwrap();
        fs::create_dir_all(temp.path().join("blogs/news")).unwrap();
        fs::write(temp.path().join("index.html"), "x").unwrap();
        fs::write(temp.path().join("products/red-shoes.html"), "x").unwrap();
        fs::write(temp.path().join("blogs/news/index.html"), "x").unwrap();

        let mut paths: Vec<String> = prerendered_manifest(temp.path())
            .unwrap()
            .into_iter()
            .map(|entry| entry.path)
            .collect();
        paths.sort();
        assert_eq!(paths, ["/", "/blogs/news", "/products/red-shoes"]);
    }

    #[test]
    fn file_manifest_sanitizes_asset_ids() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("build");
        fs::create_dir_all(out.join("_app/pages/products")).unwrap();
        fs::write(out.join("_app/pages/products/[handle].svelte-5e6f.js"), "x").unwrap();

        let manifest = file_manifest(&out, ".svelte").unwrap();
        assert_eq!(manifest.len(), 1);

        let entry = &manifest[0];
        assert_eq!(entry.asset, "_app_pages_products_handle.svelte-5e6f.js");
        assert_eq!(entry.pattern, "products/[handle]");
        assert_eq!(
            entry.to,
            out.join("theme/assets/_app_pages_products_handle.svelte-5e6f.js.liquid")
        );
    }

    #[test]
    fn non_page_files_keep_their_relative_pattern() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("build");
        fs::create_dir_all(out.join("_app")).unwrap();
        fs::write(out.join("_app/start-1a2b.js"), "x").unwrap();

        let manifest = file_manifest(&out, ".svelte").unwrap();
        assert_eq!(manifest[0].pattern, "start-1a2b.js");
        assert_eq!(manifest[0].asset, "_app_start-1a2b.js");
    }

    #[test]
    fn route_manifest_compiles_patterns() {
        let temp = TempDir::new().unwrap();
        let routes = temp.path().join("src/routes");
        fs::create_dir_all(routes.join("products")).unwrap();
        fs::write(routes.join("index.svelte"), "x").unwrap();
        fs::write(routes.join("products/[handle].svelte"), "x").unwrap();

        let mut manifest = route_manifest(&routes, ".svelte").unwrap();
        manifest.sort_by(|a, b| a.pattern.cmp(&b.pattern));

        assert_eq!(manifest[0].pattern, "index");
        assert!(manifest[0].route.matches("/").is_some());
        assert_eq!(manifest[1].pattern, "products/[handle]");
        assert!(manifest[1].route.matches("/products/red-shoes").is_some());
    }
}
