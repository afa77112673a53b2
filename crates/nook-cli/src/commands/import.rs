use std::path::Path;

use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context, category: &str, file: &Path) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let mut pedia = ctx.critterpedia();
    let target = pedia.dataset_path(category);
    let dataset = pedia.install(category, file).map_err(|e| e.to_string())?;

    println!(
        "  {} {} {} into {}",
        "Installed".bold(),
        dataset.len(),
        category.title().to_lowercase(),
        target.display()
    );
    Ok(())
}
