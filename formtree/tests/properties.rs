//! Invariants that hold across sequences of operations.

use formtree::{
    Item, Node, SelectedValue, SelectionPolicy, Tree, build, extract_selected, filter, toggle,
};

fn flat() -> Vec<Item> {
    vec![
        Item::new("k1", "Apple"),
        Item::new("k2", "Banana"),
        Item::new("k3", "Cherry").background(),
        Item::new("k4", "Damson").with_sort(1),
        Item::new("k5", "Elderberry"),
    ]
}

fn nested() -> Vec<Item> {
    vec![
        Item::new("fruit", "Fruit").with_children(vec![
            Item::new("apple", "Apple"),
            Item::new("citrus", "Citrus").with_children(vec![
                Item::new("lemon", "Lemon"),
                Item::new("lime", "Lime"),
            ]),
        ]),
        Item::new("veg", "Vegetables").with_children(vec![
            Item::new("leek", "Leek"),
            Item::new("lemon", "Lemon grass"),
        ]),
        Item::new("nuts", "Nuts"),
    ]
}

fn selected_paths(tree: &Tree) -> Vec<String> {
    extract_selected(tree)
        .iter()
        .map(|node| node.path.clone())
        .collect()
}

fn visible_paths(tree: &Tree) -> Vec<String> {
    tree.iter()
        .filter(|node| node.is_visible)
        .map(|node| node.path.clone())
        .collect()
}

#[test]
fn test_round_trip_of_selected_keys() {
    let values = [
        SelectedValue::None,
        SelectedValue::from("k2"),
        SelectedValue::from(vec!["k1", "k3", "k5"]),
        SelectedValue::from(vec!["k4", "missing"]),
    ];
    for value in values {
        let direct = build(&flat(), &value);
        let keys: Vec<String> = extract_selected(&direct)
            .iter()
            .map(|node| node.key.clone())
            .collect();
        let rebuilt = build(&flat(), &SelectedValue::from(keys));
        assert_eq!(selected_paths(&rebuilt), selected_paths(&direct));
    }
}

#[test]
fn test_single_select_exclusivity() {
    let sequences: [&[&str]; 4] = [
        &["fruit.apple", "veg.leek", "fruit.citrus.lime", "nuts"],
        &["fruit.citrus.lemon", "veg.lemon", "veg.lemon", "veg.lemon"],
        &["fruit", "fruit.citrus", "bogus", "fruit.citrus.lime.x"],
        &["nuts", "nuts", "fruit.apple", "fruit.apple"],
    ];
    for policy in [
        SelectionPolicy::single(),
        SelectionPolicy::single().disable_deselect(),
    ] {
        for sequence in sequences {
            let mut tree = build(&nested(), &SelectedValue::None);
            for path in sequence {
                tree = toggle(&tree, path, policy);
                assert!(
                    extract_selected(&tree).len() <= 1,
                    "more than one selected after toggling {path}"
                );
            }
        }
    }
}

#[test]
fn test_disable_deselect_never_empties_selection() {
    let policy = SelectionPolicy::single().disable_deselect();
    let mut tree = build(&nested(), &SelectedValue::from("nuts"));
    for path in ["nuts", "veg.leek", "veg.leek", "fruit.citrus", "fruit.citrus"] {
        tree = toggle(&tree, path, policy);
        assert_eq!(selected_paths(&tree), vec![path.to_string()]);
    }
}

#[test]
fn test_multi_select_is_independent() {
    let policy = SelectionPolicy::multi();
    let mut tree = build(&nested(), &SelectedValue::None);
    for path in ["fruit", "fruit.citrus.lemon", "veg.lemon", "nuts"] {
        tree = toggle(&tree, path, policy);
    }
    // Traversal order: roots are sorted Fruit, Nuts, Vegetables.
    assert_eq!(
        selected_paths(&tree),
        vec!["fruit", "fruit.citrus.lemon", "nuts", "veg.lemon"]
    );

    tree = toggle(&tree, "fruit", policy);
    assert_eq!(
        selected_paths(&tree),
        vec!["fruit.citrus.lemon", "nuts", "veg.lemon"]
    );
}

#[test]
fn test_filter_visibility_is_monotonic() {
    let pairs = [("l", "le"), ("le", "lem"), ("lem", "lemon"), ("", "nut"), ("i", "lime")];
    let tree = build(&nested(), &SelectedValue::None);
    for (shorter, longer) in pairs {
        let broad = visible_paths(&filter(&tree, shorter));
        let narrow = visible_paths(&filter(&tree, longer));
        for path in &narrow {
            assert!(
                broad.contains(path),
                "{path} visible for {longer:?} but not for {shorter:?}"
            );
        }
    }
}

fn assert_ancestors_visible(nodes: &[Node]) {
    for node in nodes {
        if node.children().iter().any(|child| child.is_visible) {
            assert!(node.is_visible, "{} hides a visible child", node.path);
        }
        assert_ancestors_visible(node.children());
    }
}

#[test]
fn test_ancestor_visibility() {
    let tree = build(&nested(), &SelectedValue::None);
    for query in ["lemon", "LIME", "grass", "e", "zzz", "apple"] {
        assert_ancestors_visible(filter(&tree, query).roots());
    }
}

#[test]
fn test_empty_filter_is_idempotent() {
    let tree = build(&nested(), &SelectedValue::None);
    for query in ["lime", "zzz", ""] {
        let restored = filter(&filter(&tree, query), "");
        assert!(restored.iter().all(|node| node.is_visible));
        assert_eq!(restored.len(), tree.len());
    }
}

#[test]
fn test_filter_does_not_touch_selection() {
    let tree = build(&nested(), &SelectedValue::from(vec!["veg.leek", "nuts"]));
    let filtered = filter(&tree, "lemon");
    assert_eq!(selected_paths(&filtered).len(), 2);
    assert!(filtered.find("veg.leek").unwrap().is_selected);
}
