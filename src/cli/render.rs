//! `vasset render`: the application layout with versioned asset tags.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use super::{RenderArgs, common::with_versioner};
use crate::{
    config::AppConfig,
    embed::layout::{LayoutVars, render_layout},
    log,
};

/// Render the layout and write it to `args.output` or stdout.
pub fn render_page(config: &AppConfig, args: &RenderArgs) -> Result<()> {
    let html = render_to_string(config, args)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            fs::write(path, &html)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("render"; "wrote {}", path.display());
        }
        None => io::stdout().lock().write_all(html.as_bytes())?,
    }
    Ok(())
}

/// Build layout variables from config and CLI, then render.
fn render_to_string(config: &AppConfig, args: &RenderArgs) -> Result<String> {
    let mut vars = LayoutVars::from_config(config);
    if let Some(title) = &args.title {
        vars = vars.with_title(title.as_str());
    }
    if let Some(token) = &args.csrf_token {
        vars = vars.with_csrf_token(token.as_str());
    }
    if let Some(path) = &args.styles {
        vars = vars.with_styles(read_fragment(path)?);
    }
    if let Some(path) = &args.content {
        vars = vars.with_content(read_fragment(path)?);
    }
    if let Some(path) = &args.scripts {
        vars = vars.with_scripts(read_fragment(path)?);
    }

    with_versioner(config, |versioner| {
        render_layout(&vars, versioner).context("failed to expand asset helpers")
    })
}

/// Read an HTML fragment from a file, or stdin for `-`.
fn read_fragment(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}
