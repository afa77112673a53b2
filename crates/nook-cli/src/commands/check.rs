use colored::Colorize;

use nook_core::Category;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let mut pedia = ctx.critterpedia();
    let mut failed = 0;

    for category in Category::ALL {
        let path = pedia.dataset_path(category);
        match pedia.dataset(category) {
            Ok(dataset) => println!(
                "  {} {}: {} creatures",
                "ok".green(),
                path.display(),
                dataset.len()
            ),
            Err(e) => {
                failed += 1;
                println!("  {} {e}", "FAIL".red());
            }
        }
    }

    if failed > 0 {
        return Err(format!(
            "{failed} dataset{} failed to load",
            if failed == 1 { "" } else { "s" }
        ));
    }
    println!("  All datasets are valid.");
    Ok(())
}
