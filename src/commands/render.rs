use std::path::Path;

use anyhow::Result;

pub fn cmd_render(file: &Path, user_agent: Option<&str>, secure: bool) -> Result<()> {
    let (mut config, bar, _warnings) = super::load_bar(file)?;

    if let Some(user_agent) = user_agent {
        config.render.user_agent = Some(user_agent.to_string());
    }
    if secure {
        config.render.secure = true;
    }

    println!("{}", bar.render(&config.render_context()));
    Ok(())
}
