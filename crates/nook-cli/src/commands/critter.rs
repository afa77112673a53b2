use colored::Colorize;

use nook_bot::format::creature_card;
use nook_core::{Category, CritterError};

use super::Context;

pub fn run(ctx: &Context, category: Category, name: &str) -> Result<(), String> {
    let mut pedia = ctx.critterpedia();
    let creature = pedia
        .lookup(category, name)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| {
            CritterError::CreatureNotFound {
                category,
                name: name.to_string(),
            }
            .to_string()
        })?;

    let card = creature_card(category, creature);
    let mut lines = card.lines();
    if let Some(title) = lines.next() {
        println!("{}", title.bold());
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
