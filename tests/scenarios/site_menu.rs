//! Scenario: a site toolbar with a site menu on the left and an account
//! menu in a secondary group on the right.

use adminbar::{AdminBar, NodeArgs, NodeMeta, RenderContext};
use insta::assert_snapshot;

fn site_toolbar() -> AdminBar {
    let mut bar = AdminBar::new();
    bar.add_node(
        NodeArgs::new("site-name")
            .title("My Blog")
            .href("/wp-admin/"),
    );
    bar.add_node(
        NodeArgs::new("view-site")
            .title("Visit Site")
            .parent("site-name")
            .href("/"),
    );
    bar.add_group(NodeArgs::new("top-secondary").meta(NodeMeta {
        class: Some("ab-top-secondary".to_string()),
        ..NodeMeta::default()
    }));
    bar.add_node(
        NodeArgs::new("my-account")
            .title("Howdy, admin")
            .parent("top-secondary")
            .href("/wp-admin/profile.php"),
    );
    bar.add_group(NodeArgs::new("user-actions").parent("my-account"));
    bar.add_node(
        NodeArgs::new("user-info")
            .title("admin")
            .parent("user-actions")
            .href("/wp-admin/profile.php"),
    );
    bar.add_node(
        NodeArgs::new("logout")
            .title("Log Out")
            .parent("user-actions")
            .href("/wp-login.php?action=logout&_wpnonce=abc"),
    );
    bar
}

/// SCENARIO: minimal bar with one parent item and one link
#[test]
fn scenario_site_name_with_visit_site() {
    let mut bar = AdminBar::new();
    bar.add_node(NodeArgs::new("site-name").title("My Site"));
    bar.add_node(
        NodeArgs::new("visit-site")
            .title("Visit Site")
            .parent("site-name")
            .href("/"),
    );

    let html = bar.render(&RenderContext::default());
    assert_snapshot!(html, @r#"<div id="wpadminbar" class="nojq nojs" role="navigation"><div class="quicklinks" role="menubar"><ul id="wp-admin-bar-root-default" class="ab-top-menu" role="menu"><li id="wp-admin-bar-site-name" class="menupop"><div class="ab-item ab-empty-item" tabindex="10" role="menuitem" aria-haspopup="true">My Site</div><div class="ab-sub-wrapper"><ul id="wp-admin-bar-site-name-default" class="ab-submenu" role="menu"><li id="wp-admin-bar-visit-site" class=""><a class="ab-item" tabindex="10" role="menuitem" href="/">Visit Site</a></li></ul></div></li></ul></div></div>"#);
}

/// SCENARIO: full toolbar with a secondary group and an explicit submenu group
#[test]
fn scenario_site_toolbar_renders_both_sides() {
    let bar = site_toolbar();

    let tree = bar.bind();
    let top: Vec<_> = tree.top_level().iter().map(|g| g.id()).collect();
    assert_eq!(top, ["root-default", "top-secondary"]);
    assert!(tree.dropped().is_empty());

    let html = bar.render(&RenderContext::default());
    assert_eq!(
        html,
        concat!(
            r#"<div id="wpadminbar" class="nojq nojs" role="navigation">"#,
            r#"<div class="quicklinks" role="menubar">"#,
            r#"<ul id="wp-admin-bar-root-default" class="ab-top-menu" role="menu">"#,
            r#"<li id="wp-admin-bar-site-name" class="menupop">"#,
            r#"<a class="ab-item" tabindex="10" role="menuitem" aria-haspopup="true" href="/wp-admin/">My Blog</a>"#,
            r#"<div class="ab-sub-wrapper">"#,
            r#"<ul id="wp-admin-bar-site-name-default" class="ab-submenu" role="menu">"#,
            r#"<li id="wp-admin-bar-view-site" class=""><a class="ab-item" tabindex="10" role="menuitem" href="/">Visit Site</a></li>"#,
            r#"</ul></div></li></ul>"#,
            r#"<ul id="wp-admin-bar-top-secondary" class="ab-top-menu ab-top-secondary" role="menu">"#,
            r#"<li id="wp-admin-bar-my-account" class="menupop">"#,
            r#"<a class="ab-item" tabindex="10" role="menuitem" aria-haspopup="true" href="/wp-admin/profile.php">Howdy, admin</a>"#,
            r#"<div class="ab-sub-wrapper">"#,
            r#"<ul id="wp-admin-bar-user-actions" class="ab-submenu" role="menu">"#,
            r#"<li id="wp-admin-bar-user-info" class=""><a class="ab-item" tabindex="10" role="menuitem" href="/wp-admin/profile.php">admin</a></li>"#,
            r#"<li id="wp-admin-bar-logout" class=""><a class="ab-item" tabindex="10" role="menuitem" href="/wp-login.php?action=logout&#038;_wpnonce=abc">Log Out</a></li>"#,
            r#"</ul></div></li></ul>"#,
            r#"</div></div>"#,
        )
    );
}

/// SCENARIO: a plugin removes a menu that others hung entries off
#[test]
fn scenario_removed_parent_drops_its_subtree() {
    let mut bar = site_toolbar();
    bar.remove_node("my-account");

    let tree = bar.bind();
    assert_eq!(tree.dropped(), ["user-actions", "user-info", "logout"]);

    let html = bar.render(&RenderContext::default());
    assert!(!html.contains("wp-admin-bar-my-account"));
    assert!(!html.contains("wp-admin-bar-logout"));
    // An emptied group emits nothing.
    assert!(!html.contains("wp-admin-bar-top-secondary"));
    assert!(html.contains("wp-admin-bar-view-site"));
}

/// SCENARIO: rendering twice from the same bar yields identical output
#[test]
fn scenario_render_is_repeatable() {
    let bar = site_toolbar();
    let context = RenderContext::default();

    assert_eq!(bar.render(&context), bar.render(&context));
    assert_eq!(bar.bind(), bar.bind());
}

/// SCENARIO: merging into an existing entry changes its markup in place
#[test]
fn scenario_merge_updates_existing_entry() {
    let mut bar = site_toolbar();
    bar.add_node(NodeArgs::new("site-name").meta(NodeMeta {
        class: Some("highlight".to_string()),
        ..NodeMeta::default()
    }));

    let tree = bar.bind();
    let site = tree.find("site-name").unwrap();
    assert_eq!(site.node.title.as_deref(), Some("My Blog"));
    assert_eq!(site.node.href(), Some("/wp-admin/"));

    let html = bar.render(&RenderContext::default());
    assert!(html.contains(r#"<li id="wp-admin-bar-site-name" class="menupop highlight">"#));
    // Still first among the top-level entries.
    let site_at = html.find("wp-admin-bar-site-name").unwrap();
    let account_at = html.find("wp-admin-bar-my-account").unwrap();
    assert!(site_at < account_at);
}

/// SCENARIO: an entry registered with only a title still gets an id
#[test]
fn scenario_title_only_entry_gets_derived_id() {
    let mut bar = AdminBar::new();
    bar.add_node(NodeArgs {
        title: Some("Edit Post".to_string()),
        href: Some("/wp-admin/post.php?post=1&action=edit".to_string()),
        ..NodeArgs::default()
    });

    assert!(bar.get_node("edit-post").is_some());
    let html = bar.render(&RenderContext::default());
    assert!(html.contains(r#"<li id="wp-admin-bar-edit-post" class="">"#));
}
