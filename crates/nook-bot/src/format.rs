//! Turning creatures and windows into replies.

use nook_core::month::abbrev;
use nook_core::{Category, Creature, Hemisphere, SeasonalWindow, WindowView};

use crate::reply::{Embed, MONTH_COLOUR};

/// The text card for a single creature.
pub fn creature_card(category: Category, creature: &Creature) -> String {
    let mut lines = vec![
        format!("{} - *{}*", creature.name, creature.catch_quote),
        format!("Selling price: {}", creature.nook_price),
    ];
    if let Some(price) = creature.venue_price(category) {
        lines.push(format!("{} selling price: {price}", category.venue()));
    }
    lines.push(format!("Location: {}", creature.location));
    if category == Category::Fish {
        let shadow = creature.shadow_size.as_deref().unwrap_or("Unknown");
        lines.push(format!("Shadow size: {shadow}"));
    }
    lines.push(format!("Active hours: {}", creature.active_hours));
    for hemisphere in Hemisphere::ALL {
        lines.push(format!(
            "Active months ({hemisphere}): {}",
            creature.months(hemisphere)
        ));
    }
    lines.push(format!("More details at {}", creature.details_link));
    lines.join("\n")
}

/// Comma-separated display names, or `None` for an empty list.
pub fn name_list(creatures: &[&Creature]) -> String {
    if creatures.is_empty() {
        return "None".to_string();
    }
    creatures
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The embed listing recurring, new, and leaving creatures.
pub fn month_embed(view: WindowView, window: &SeasonalWindow<'_>) -> Embed {
    let kind = window.category.title();
    let prev = abbrev(window.previous);
    let cur = abbrev(window.current);
    let next = abbrev(window.next);

    let (recurring, new, leaving) = match view {
        WindowView::Previous => (
            format!("{kind} that were active since {prev}"),
            format!("{kind} that were new to {cur}!"),
            format!("{kind} that left in {next}"),
        ),
        WindowView::This => (
            format!("{kind} that have stayed since {prev}"),
            format!("{kind} that are new for {cur}!"),
            format!("{kind} that will be leaving in {next}"),
        ),
        WindowView::Next => (
            format!("{kind} that will stay after {prev}"),
            format!("{kind} that will be new for {cur}!"),
            format!("{kind} that will be leaving in {next}"),
        ),
    };

    Embed::new(
        format!("{kind} for {cur} in the {} hemisphere", window.hemisphere),
        MONTH_COLOUR,
    )
    .field(recurring, name_list(&window.recurring))
    .field(new, name_list(&window.new))
    .field(leaving, name_list(&window.leaving))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;
    use nook_core::Dataset;

    const FISH: &str = r#"{
        "bluemarlin": {
            "name": "Blue Marlin",
            "catchquote": "I caught a blue marlin! It must be a real fan of the blues!",
            "nook_price": 10000,
            "cj_price": 15000,
            "location": "Pier",
            "shadow_size": "Largest (6)",
            "active_hours": "All day",
            "months_available": {
                "northern": ["Jan", "Feb", "Mar", "Apr", "Jul", "Aug", "Sep", "Nov", "Dec"],
                "southern": ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
            },
            "details_link": "https://example.org/Blue_Marlin"
        },
        "seabass": {
            "name": "Sea Bass",
            "catchquote": "I caught a sea bass! No, wait- it's at least a C+!",
            "nook_price": 400,
            "cj_price": 600,
            "location": "Sea",
            "shadow_size": "Large (5)",
            "active_hours": "All day",
            "months_available": {
                "northern": ["Jan", "Feb", "Mar", "Apr", "Nov", "Dec"],
                "southern": ["May", "Jun", "Jul", "Aug", "Sep", "Oct"]
            },
            "details_link": "https://example.org/Sea_Bass"
        }
    }"#;

    const BUGS: &str = r#"{
        "tigerbutterfly": {
            "name": "Tiger Butterfly",
            "catchquote": "I caught a tiger butterfly!",
            "nook_price": 240,
            "flick_price": "360",
            "location": "Flying near flowers",
            "active_hours": "4 AM - 7 PM",
            "months_available": { "northern": ["Mar", "Apr", "May"], "southern": ["Sep", "Oct", "Nov"] },
            "details_link": "https://example.org/Tiger_Butterfly"
        }
    }"#;

    #[test]
    fn fish_card() {
        let ds = Dataset::from_json(Category::Fish, FISH).unwrap();
        let card = creature_card(Category::Fish, ds.lookup("blue marlin").unwrap());
        insta::assert_snapshot!(card, @r"
        Blue Marlin - *I caught a blue marlin! It must be a real fan of the blues!*
        Selling price: 10000
        C.J. selling price: 15000
        Location: Pier
        Shadow size: Largest (6)
        Active hours: All day
        Active months (northern): Jan, Feb, Mar, Apr, Jul, Aug, Sep, Nov, Dec
        Active months (southern): All year
        More details at https://example.org/Blue_Marlin
        ");
    }

    #[test]
    fn bug_card_has_no_shadow() {
        let ds = Dataset::from_json(Category::Bugs, BUGS).unwrap();
        let card = creature_card(Category::Bugs, ds.lookup("Tiger Butterfly").unwrap());
        insta::assert_snapshot!(card, @r"
        Tiger Butterfly - *I caught a tiger butterfly!*
        Selling price: 240
        Flick selling price: 360
        Location: Flying near flowers
        Active hours: 4 AM - 7 PM
        Active months (northern): Mar, Apr, May
        Active months (southern): Sep, Oct, Nov
        More details at https://example.org/Tiger_Butterfly
        ");
    }

    #[test]
    fn month_embed_for_this_month() {
        let ds = Dataset::from_json(Category::Fish, FISH).unwrap();
        let window = SeasonalWindow::compute(&ds, Hemisphere::Northern, Month::April);
        let embed = month_embed(WindowView::This, &window);

        assert_eq!(embed.title, "Fish for Apr in the northern hemisphere");
        assert_eq!(embed.colour, 0xF9D048);
        let fields: Vec<(&str, &str)> = embed
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect();
        assert_eq!(
            fields,
            [
                ("Fish that have stayed since Mar", "Blue Marlin, Sea Bass"),
                ("Fish that are new for Apr!", "None"),
                ("Fish that will be leaving in May", "Blue Marlin, Sea Bass"),
            ]
        );
        assert!(embed.fields.iter().all(|f| !f.inline));
    }

    #[test]
    fn month_embed_wording_per_view() {
        let ds = Dataset::from_json(Category::Fish, FISH).unwrap();
        let window = SeasonalWindow::compute(&ds, Hemisphere::Southern, Month::May);

        let prev = month_embed(WindowView::Previous, &window);
        assert_eq!(prev.fields[0].name, "Fish that were active since Apr");
        assert_eq!(prev.fields[1].name, "Fish that were new to May!");
        assert_eq!(prev.fields[1].value, "Sea Bass");
        assert_eq!(prev.fields[2].name, "Fish that left in Jun");

        let next = month_embed(WindowView::Next, &window);
        assert_eq!(next.fields[0].name, "Fish that will stay after Apr");
        assert_eq!(next.fields[1].name, "Fish that will be new for May!");
    }

    #[test]
    fn empty_list_is_none() {
        assert_eq!(name_list(&[]), "None");
    }
}
