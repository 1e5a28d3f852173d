//! Multi-select over a nested region tree.
//!
//! Run with: cargo run -p formtree --example regions

use formtree::{Autocomplete, AutocompleteConfig, AutocompleteProps, Item};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let items = Item::list_from_json(
        r#"[
            {"key": "eu", "value": "Europe", "children": [
                {"key": "fr", "value": "France", "children": [
                    {"key": "par", "value": "Paris"},
                    {"key": "lyo", "value": "Lyon"}
                ]},
                {"key": "de", "value": "Germany", "children": [
                    {"key": "ber", "value": "Berlin"}
                ]}
            ]},
            {"key": "na", "value": "North America", "children": [
                {"key": "us", "value": "United States", "children": [
                    {"key": "par", "value": "Paris", "title": "Paris, Texas"}
                ]}
            ]},
            {"key": "xx", "value": "Unassigned", "isBackground": true}
        ]"#,
    )?;

    let mut control = Autocomplete::new(AutocompleteConfig::default().multiselect());
    control.set_props(AutocompleteProps::new("regions", items).with_value(vec!["eu.de.ber"]));
    println!("Preview: {}", control.text());

    control.on_filter_text_changed("par");
    for row in control.rows() {
        println!(
            "{}{} {}",
            "  ".repeat(row.depth),
            if row.is_selected() { "[x]" } else { "[ ]" },
            row.tooltip()
        );
    }

    control.on_item_activated("na.us.par");
    let commit = control.on_commit();
    println!("\nCommitted: {:?}", commit.value);
    println!("Preview: {}", commit.preview);

    Ok(())
}
