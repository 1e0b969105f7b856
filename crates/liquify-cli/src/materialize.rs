//! Template materialization
//!
//! Turns built client files into theme assets and prerendered pages into
//! storefront templates. The platform renders its own page shell, so each
//! template keeps only the head-level hydration machinery and a mount
//! point; a small injected snippet re-derives the route parameters from
//! the live location, since the page is served from the platform's URL
//! space rather than the framework's.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use liquify_router::RoutePattern;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::manifest::{FileManifestEntry, PrerenderedEntry, RouteEntry};
use crate::rewrite::rewrite_asset_refs;
use crate::templates::template_for;

/// Embedded initial-route values in the prerendered start script.
static INITIAL_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"path: .+,").unwrap());
static INITIAL_PARAMS: Lazy<Regex> = Lazy::new(|| Regex::new(r"params: .+").unwrap());

/// Whole document body, nested content included.
static BODY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<body>.*</body>").unwrap());

/// Hydration mount point left in place of the body.
const MOUNT_POINT: &str = r#"<div id="svelte"/>"#;

/// Self-invoking expression that re-derives route parameters from the live
/// location at hydration time. `empty` resolves to the client runtime's
/// parameterless extractor.
fn params_snippet(route: &RoutePattern) -> String {
    format!(
        concat!(
            "(() => {{\n",
            "    const match = window.location.pathname.match({regex})\n",
            "    const make_params = {params}\n",
            "    const result = make_params(match)\n",
            "    return result === \"empty\" ? {{}} : result\n",
            "}})()"
        ),
        regex = route.client_regex_literal(),
        params = route.params.client_source(),
    )
}

/// Rewrites every built client file into `theme/assets/`.
pub fn materialize_assets(files: &[FileManifestEntry]) -> Result<()> {
    for entry in files {
        let code = std::fs::read_to_string(&entry.from)
            .with_context(|| format!("Failed to read built file {}", entry.from.display()))?;
        let code = rewrite_asset_refs(&code, files)
            .with_context(|| format!("While rewriting {}", entry.from.display()))?;

        if let Some(parent) = entry.to.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&entry.to, code)
            .with_context(|| format!("Failed to write {}", entry.to.display()))?;
    }
    Ok(())
}

/// Materializes one storefront template per mapped route.
///
/// Routes without a table entry, and routes no prerendered file matches,
/// are skipped: many framework routes have no storefront equivalent. The
/// first matching prerendered entry wins; enumeration order breaks ties.
/// Returns the written template paths.
pub fn materialize_templates(
    out: &Path,
    routes: &[RouteEntry],
    prerendered: &[PrerenderedEntry],
    files: &[FileManifestEntry],
) -> Result<Vec<PathBuf>> {
    let templates_dir = out.join("theme").join("templates");
    let mut written = Vec::new();

    for entry in routes {
        let Some(template) = template_for(&entry.pattern) else {
            continue;
        };
        let Some(page) = prerendered
            .iter()
            .find(|page| entry.route.regex.is_match(&page.path))
        else {
            continue;
        };

        let code = std::fs::read_to_string(&page.original)
            .with_context(|| format!("Failed to read {}", page.original.display()))?;
        let code = rewrite_page(&code, &entry.route, files)
            .with_context(|| format!("While materializing {}", template))?;

        let to = templates_dir.join(template);
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&to, code).with_context(|| format!("Failed to write {}", to.display()))?;
        written.push(to);
    }

    Ok(written)
}

/// Applies the hydration rewrites and asset rewriting to one page.
fn rewrite_page(
    code: &str,
    route: &RoutePattern,
    files: &[FileManifestEntry],
) -> Result<String> {
    let code = INITIAL_PATH.replace(code, NoExpand("path: location.pathname,"));
    let params_line = format!("params: {}", params_snippet(route));
    let code = INITIAL_PARAMS.replace(&code, NoExpand(params_line.as_str()));
    let code = BODY.replace_all(&code, NoExpand(MOUNT_POINT));
    Ok(rewrite_asset_refs(&code, files)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use liquify_router::compile;

    #[test]
    fn rewrites_hydration_state_and_body() {
        let route = compile("products/[handle]", false).unwrap();
        let html = concat!(
            "<head><script>start({\n",
            "  route: true,\n",
            "  path: \"/products/red-shoes\",\n",
            "  params: {}\n",
            "});</script></head>\n",
            "<body><p>rendered</p></body>"
        );

        let out = rewrite_page(html, &route, &[]).unwrap();
        assert!(out.contains("path: location.pathname,"));
        assert!(out.contains(r"window.location.pathname.match(/^\/products\/([^/]+?)$/)"));
        assert!(out.contains("const make_params = (m) => ({ handle: m[1] })"));
        assert!(out.contains(r#"<div id="svelte"/>"#));
        assert!(!out.contains("<p>rendered</p>"));
    }

    #[test]
    fn parameterless_route_uses_empty_marker() {
        let route = compile("cart", false).unwrap();
        let html = "path: \"/cart\",\nparams: {}\n<body></body>";

        let out = rewrite_page(html, &route, &[]).unwrap();
        assert!(out.contains("const make_params = empty"));
        assert!(out.contains("return result === \"empty\" ? {} : result"));
    }
}
