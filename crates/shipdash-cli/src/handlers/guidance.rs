use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use std::path::Path;

pub fn handle(ctx: &HandlerContext, config_path: &Path) -> Result<()> {
    ctx.render(presenters::present_guidance(config_path, config_path.exists()))
}
