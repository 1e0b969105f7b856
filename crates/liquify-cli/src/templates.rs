//! Fixed route-to-template mapping

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Storefront template file for each known route pattern.
///
/// Hand-authored: patterns absent from this table have no storefront-page
/// equivalent and are dropped from materialization entirely.
static TEMPLATE_BY_PATTERN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "account/activate/[id]/[token]",
            "customers/activate_account.liquid",
        ),
        ("account/addresses", "customers/addresses.liquid"),
        ("account/index", "customers/account.liquid"),
        ("account/login", "customers/login.liquid"),
        ("account/orders/[handle]", "customers/order.liquid"),
        ("account/register", "customers/register.liquid"),
        ("account/reset/[id]/[token]", "customers/reset_password.liquid"),
        ("blogs/[blog_handle]/[article_handle]", "article.liquid"),
        ("blogs/[blog_handle]/index", "blog.liquid"),
        ("cart", "cart.liquid"),
        ("collections/[handle]", "collection.liquid"),
        ("index", "index.liquid"),
        ("pages/[handle]", "page.liquid"),
        ("products/[handle]", "product.liquid"),
    ])
});

/// Looks up the storefront template for a route pattern string.
pub fn template_for(pattern: &str) -> Option<&'static str> {
    TEMPLATE_BY_PATTERN.get(pattern).copied()
}
