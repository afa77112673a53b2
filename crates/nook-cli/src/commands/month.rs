use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use nook_bot::format::month_embed;
use nook_bot::settings::{JsonSettings, resolve_hemisphere};
use nook_bot::{BotError, ServerId};
use nook_core::{CritterError, WindowView};

use super::Context;

pub fn run(
    ctx: &Context,
    category: &str,
    hemisphere: Option<&str>,
    server: Option<u64>,
    offset: i32,
) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let settings = JsonSettings::load(&ctx.config.settings_path).map_err(|e| e.to_string())?;
    let hemisphere = resolve_hemisphere(&settings, server.map(ServerId), hemisphere)
        .map_err(|e| describe(&e))?;

    let mut pedia = ctx.critterpedia();
    let window = pedia
        .window(category, hemisphere, offset)
        .map_err(|e| e.to_string())?;
    let view = match offset {
        ..0 => WindowView::Previous,
        0 => WindowView::This,
        _ => WindowView::Next,
    };
    let embed = month_embed(view, &window);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", category.title()]);
    for field in &embed.fields {
        table.add_row(vec![field.name.as_str(), field.value.as_str()]);
    }

    println!("  {}", embed.title.bold());
    println!("{table}");
    Ok(())
}

fn describe(err: &BotError) -> String {
    match err {
        BotError::Critter(CritterError::InvalidHemisphere(input)) if input.is_empty() => {
            "no hemisphere given and no server default; pass --hemisphere".to_string()
        }
        _ => err.to_string(),
    }
}
