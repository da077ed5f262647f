use std::path::Path;

use adminbar::domain::entities::BoundNode;
use anyhow::Result;

pub fn cmd_tree(file: &Path, json: bool) -> Result<()> {
    let (_config, bar, _warnings) = super::load_bar(file)?;
    let tree = bar.bind();

    if json {
        println!("{}", tree.to_json()?);
        return Ok(());
    }

    let mut out = String::new();
    write_node(&mut out, tree.root(), 0);
    print!("{}", out);
    Ok(())
}

fn write_node(out: &mut String, node: &BoundNode, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(node.id());
    if node.is_group() {
        out.push_str(" [group]");
    }
    if let Some(title) = node.node.title.as_deref().filter(|t| !t.is_empty()) {
        out.push_str(&format!(" {:?}", title));
    }
    out.push('\n');

    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}
