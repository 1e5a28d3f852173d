//! Session lifecycle of the autocomplete control.

use formtree::{
    Autocomplete, AutocompleteConfig, AutocompleteProps, Item, MatchMode, SelectedValue, Validity,
};

fn fruit() -> Vec<Item> {
    vec![
        Item::new("k1", "Apple"),
        Item::new("k2", "Banana"),
        Item::new("k3", "Cherry"),
    ]
}

fn control(config: AutocompleteConfig, value: impl Into<SelectedValue>) -> Autocomplete {
    let mut control = Autocomplete::new(config);
    control.set_props(AutocompleteProps::new("fruit", fruit()).with_value(value));
    control
}

fn row_paths(control: &Autocomplete) -> Vec<String> {
    control
        .rows()
        .iter()
        .map(|row| row.path().to_string())
        .collect()
}

#[test]
fn test_initialize_shows_preview() {
    let control = control(AutocompleteConfig::default(), "k2");
    assert_eq!(control.text(), "Banana");
    assert!(!control.is_open());
    assert!(control.rows().is_empty());
}

#[test]
fn test_initial_validity() {
    let required = AutocompleteConfig::default().required();
    assert_eq!(control(required.clone(), "").validity(), Validity::Invalid);
    assert_eq!(control(required, "k1").validity(), Validity::Valid);
    assert_eq!(
        control(AutocompleteConfig::default(), "").validity(),
        Validity::Unevaluated
    );
}

#[test]
fn test_unknown_initial_value_counts_until_commit() {
    let mut control = control(AutocompleteConfig::default().required(), "nope");
    assert_eq!(control.validity(), Validity::Valid);
    assert!(control.selected().is_empty());

    let commit = control.on_commit();
    assert_eq!(commit.value, SelectedValue::None);
    assert_eq!(commit.validity, Validity::Invalid);
}

#[test]
fn test_validity_override_wins() {
    let mut control = Autocomplete::new(AutocompleteConfig::default().required());
    let outcome = control
        .set_props(
            AutocompleteProps::new("fruit", fruit())
                .with_value("k1")
                .with_valid(false),
        )
        .unwrap();
    assert_eq!(outcome.validity, Validity::Invalid);

    control.open();
    let commit = control.on_commit();
    assert_eq!(commit.validity, Validity::Invalid);
}

#[test]
fn test_open_floats_selection_and_clears_text() {
    let mut control = control(AutocompleteConfig::default().multiselect(), vec!["k3"]);
    assert_eq!(control.text(), "Selected 1");

    control.open();
    assert!(control.is_open());
    assert_eq!(control.text(), "");
    assert_eq!(row_paths(&control), vec!["k3", "k1", "k2"]);
}

#[test]
fn test_typing_filters_and_orders_visible_first() {
    let mut control = control(AutocompleteConfig::default(), "k3");
    let outcome = control.on_filter_text_changed("an");

    assert!(control.is_open());
    assert_eq!(outcome.preview, "an");
    assert_eq!(row_paths(&control), vec!["k2"]);
    let roots: Vec<&str> = outcome.tree.roots().iter().map(|n| n.key.as_str()).collect();
    assert_eq!(roots, vec!["k2", "k1", "k3"]);
}

#[test]
fn test_single_select_activation_commits() {
    let mut control = control(AutocompleteConfig::default(), "k1");
    control.open();
    let outcome = control.on_item_activated("k2");

    let commit = outcome.commit.unwrap();
    assert_eq!(commit.name, "fruit");
    assert_eq!(commit.value, SelectedValue::from("k2"));
    assert_eq!(commit.preview, "Banana");
    assert!(!control.is_open());
}

#[test]
fn test_multi_select_activation_waits_for_commit() {
    let mut control = control(AutocompleteConfig::default().multiselect().required(), "");
    control.open();
    assert!(control.on_item_activated("k1").commit.is_none());
    assert!(control.on_item_activated("k3").commit.is_none());
    assert!(control.is_open());

    let commit = control.on_commit();
    assert_eq!(commit.value, SelectedValue::from(vec!["k1", "k3"]));
    assert_eq!(commit.validity, Validity::Valid);
    assert_eq!(commit.preview, "Selected 2");
    assert_eq!(control.text(), "Selected 2");
}

#[test]
fn test_select_all() {
    let mut control = control(AutocompleteConfig::default().multiselect(), "");
    control.open();
    assert!(!control.are_all_selected());

    control.on_select_all_activated();
    assert!(control.are_all_selected());
    assert_eq!(control.selected().len(), 3);
}

#[test]
fn test_select_all_ignored_in_single_mode() {
    let mut control = control(AutocompleteConfig::default(), "");
    control.open();
    control.on_select_all_activated();
    assert!(control.selected().is_empty());
}

#[test]
fn test_clear_multi() {
    let mut control = control(AutocompleteConfig::default().multiselect(), vec!["k1", "k2"]);
    assert!(control.clear_button_visible());

    let outcome = control.on_clear().unwrap();
    assert_eq!(outcome.commit.value, SelectedValue::Many(Vec::new()));
    assert_eq!(outcome.commit.preview, "Selected 0");
    assert!(!control.clear_button_visible());
}

#[test]
fn test_clear_keeps_open_list_open() {
    let mut control = control(AutocompleteConfig::default().multiselect(), vec!["k1"]);
    control.on_filter_text_changed("app");
    let outcome = control.on_clear().unwrap();

    assert!(control.is_open());
    assert_eq!(outcome.commit.preview, "app");
    assert!(control.selected().is_empty());
}

#[test]
fn test_clear_refused_with_disable_deselect() {
    let mut control = control(AutocompleteConfig::default().disable_deselect(), "k1");
    assert!(!control.clear_button_visible());
    assert!(control.on_clear().is_none());
    assert_eq!(control.selected().len(), 1);
}

#[test]
fn test_clear_allowed_in_multi_with_disable_deselect() {
    let mut control = control(
        AutocompleteConfig::default().multiselect().disable_deselect(),
        vec!["k1"],
    );
    assert!(control.clear_button_visible());
    assert!(control.on_clear().is_some());
}

#[test]
fn test_disabled_control_ignores_interaction() {
    let mut control = control(AutocompleteConfig::default().disabled().required(), "k1");
    assert_eq!(control.validity(), Validity::Unevaluated);
    assert!(!control.clear_button_visible());

    control.open();
    assert!(!control.is_open());
    control.on_item_activated("k2");
    assert_eq!(control.selected()[0].key, "k1");
}

#[test]
fn test_set_props_rebuilds_only_on_change() {
    let mut control = control(AutocompleteConfig::default(), "k1");
    control.on_filter_text_changed("ch");

    let same = AutocompleteProps::new("fruit", fruit()).with_value("k1");
    assert!(control.set_props(same).is_none());
    assert!(control.is_open());

    let changed = AutocompleteProps::new("fruit", fruit()).with_value("k3");
    let outcome = control.set_props(changed).unwrap();
    assert_eq!(outcome.preview, "Cherry");
    assert!(!control.is_open());
    assert!(outcome.tree.iter().all(|node| node.is_visible));
}

#[test]
fn test_first_set_props_always_initializes() {
    let mut control = Autocomplete::new(AutocompleteConfig::default().required());
    let outcome = control.set_props(AutocompleteProps::default()).unwrap();
    assert_eq!(outcome.validity, Validity::Invalid);
}

#[test]
fn test_empty_list_shows_no_data() {
    let mut control = Autocomplete::new(AutocompleteConfig::default());
    control.set_props(AutocompleteProps::new("empty", Vec::new()));
    assert!(!control.shows_no_data());
    control.open();
    assert!(control.shows_no_data());
}

#[test]
fn test_render_window_limits_rows() {
    let items: Vec<Item> = (0..120)
        .map(|i| Item::new(format!("k{i:03}"), format!("Item {i:03}")))
        .collect();
    let mut control = Autocomplete::new(AutocompleteConfig::default());
    control.set_props(AutocompleteProps::new("many", items));
    control.open();

    assert_eq!(control.row_count(), 120);
    assert_eq!(control.rows().len(), 50);
    assert_eq!(control.on_scroll(2000.0), 100);
    assert_eq!(control.rows().len(), 100);
    assert_eq!(control.on_scroll(4000.0), 150);
    assert_eq!(control.rows().len(), 120);
}

#[test]
fn test_custom_preview_formatter() {
    let mut control = Autocomplete::new(AutocompleteConfig::default().multiselect())
        .with_preview_formatter(|count: usize| format!("{count} gewählt"));
    control.set_props(AutocompleteProps::new("fruit", fruit()).with_value(vec!["k1", "k2"]));
    assert_eq!(control.text(), "2 gewählt");
}

#[test]
fn test_nested_commit_round_trips() {
    let items = vec![
        Item::new("a", "Group").with_children(vec![Item::new("b", "Leaf"), Item::new("c", "Other")]),
        Item::new("d", "Top"),
    ];
    let mut control = Autocomplete::new(AutocompleteConfig::default().multiselect());
    control.set_props(AutocompleteProps::new("nested", items.clone()));
    control.on_filter_text_changed("leaf");
    control.on_item_activated("a.b");
    control.on_item_activated("d");
    let commit = control.on_commit();
    assert_eq!(commit.value, SelectedValue::from(vec!["a.b", "d"]));

    let mut again = Autocomplete::new(AutocompleteConfig::default().multiselect());
    again.set_props(AutocompleteProps::new("nested", items).with_value(commit.value.clone()));
    assert_eq!(again.on_commit().value, commit.value);
}

#[test]
fn test_fuzzy_match_mode() {
    let mut control = control(
        AutocompleteConfig::default().with_match_mode(MatchMode::Fuzzy),
        "",
    );
    control.on_filter_text_changed("chy");
    assert_eq!(row_paths(&control), vec!["k3"]);
}
