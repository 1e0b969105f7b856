//! Asset reference rewriting
//!
//! Replaces references to built `.js`/`.css` files inside textual content
//! with Liquid expressions resolved by the platform at render time.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AdapterError;
use crate::manifest::FileManifestEntry;

/// Quoted reference to a built asset, capturing an attribute-context flag
/// and the base file name.
static ASSET_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(href=)?"[\-_\./a-z\[\]\d]+?/([\[\]\.\da-z-]+)\.(?:js|css)""#).unwrap()
});

/// Replaces every recognized asset reference in `code`, using the file
/// manifest as a reverse lookup by substring containment on source paths.
///
/// Attribute-context references become `href="{{ 'id' | asset_url }}"`;
/// bare references (script data) become the JSON-escaped inline form. A
/// base name matching no manifest entry aborts the rewrite: the referenced
/// file was not part of the scanned build output.
pub fn rewrite_asset_refs(
    code: &str,
    manifest: &[FileManifestEntry],
) -> Result<String, AdapterError> {
    let mut out = String::with_capacity(code.len());
    let mut last = 0;

    for caps in ASSET_REF.captures_iter(code) {
        let whole = caps.get(0).unwrap();
        let base_name = caps.get(2).unwrap().as_str();

        let asset = manifest
            .iter()
            .find(|entry| entry.from.to_string_lossy().contains(base_name))
            .map(|entry| entry.asset.as_str())
            .ok_or_else(|| AdapterError::UnknownAsset(base_name.to_string()))?;

        out.push_str(&code[last..whole.start()]);
        if caps.get(1).is_some() {
            out.push_str(&format!(r#"href="{{{{ '{}' | asset_url }}}}""#, asset));
        } else {
            out.push_str(&format!("{{{{ '{}' | asset_url | json }}}}", asset));
        }
        last = whole.end();
    }

    out.push_str(&code[last..]);
    Ok(out)
}
