use std::path::Path;

use anyhow::Result;

pub fn cmd_check(file: &Path, json: bool) -> Result<()> {
    let (config, bar, warnings) = super::load_bar(file)?;
    let tree = bar.bind();
    let dropped = tree.dropped();
    let context = config.render_context();

    let registered = bar.nodes().filter(|n| !n.is_root()).count();
    let bound = registered - dropped.len();

    if json {
        let warnings: Vec<_> = warnings
            .iter()
            .map(|w| {
                serde_json::json!({
                    "key": w.key,
                    "file": w.file.display().to_string(),
                    "line": w.line,
                    "suggestion": w.suggestion,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "file": file.display().to_string(),
                "nodes": registered,
                "bound": bound,
                "context": {
                    "browser": context.browser,
                    "secure": context.secure,
                    "proto": context.proto(),
                    "bar_class": context.bar_class(),
                },
                "warnings": warnings,
                "dropped": dropped,
                "passed": dropped.is_empty(),
            }))?
        );
    } else {
        for w in &warnings {
            let location = match w.line {
                Some(line) => format!("{}:{}", w.file.display(), line),
                None => w.file.display().to_string(),
            };
            match &w.suggestion {
                Some(s) => println!("warning: unknown key '{}' at {} (did you mean '{}'?)", w.key, location, s),
                None => println!("warning: unknown key '{}' at {}", w.key, location),
            }
        }
        println!("context: {} ({})", context.bar_class(), context.proto());
        for id in dropped {
            println!("dropped: {}", id);
        }
        if dropped.is_empty() {
            println!("ok: {} nodes bound", bound);
        } else {
            println!("{} of {} nodes dropped", dropped.len(), registered);
        }
    }

    if !dropped.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
