//! Scenario: a bar described in a TOML menu definition.

use std::fs;

use adminbar::{AdminBar, Browser, Config};
use tempfile::tempdir;

const MENU: &str = r#"
[render]
user_agent = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/604.1"

[[node]]
id = "site-name"
title = "My Site"

[[node]]
id = "visit-site"
title = "Visit Site"
parent = "site-name"
href = "/"

[[node]]
id = "search"
parent = "top-secondary"
title = "Search"

[node.meta]
html = "<form action=\"/\"></form>"

[[node]]
id = "top-secondary"
group = true
"#;

/// SCENARIO: load, bind and render a definition from disk
#[test]
fn scenario_menu_definition_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("menu.toml");
    fs::write(&path, MENU).unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert!(warnings.is_empty());

    let context = config.render_context();
    assert_eq!(context.browser, Browser::Mobile);

    let bar = AdminBar::from_config(&config);
    let tree = bar.bind();
    // Registered before its group; still bound once the group exists.
    assert!(tree.find("search").is_some());

    let html = bar.render(&context);
    assert!(html.starts_with(r#"<div id="wpadminbar" class="nojq nojs mobile" role="navigation">"#));
    assert!(html.contains(
        r#"<ul id="wp-admin-bar-top-secondary" class="ab-top-menu" role="menu"><li id="wp-admin-bar-search" class=""><div class="ab-item ab-empty-item" tabindex="10" role="menuitem">Search</div><form action="/"></form></li></ul>"#
    ));
}
