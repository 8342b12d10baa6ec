//! Black-box tests: scripted input through a full session.

use std::collections::HashSet;
use std::io::Cursor;

use larder_cli::Session;
use larder_inventory::Inventory;

fn run(script: &str) -> (Inventory, String) {
    let mut session = Session::new(Inventory::new(), Cursor::new(script.to_string()), Vec::new());
    session.run().expect("session should finish");
    let (inventory, out) = session.into_parts();
    (inventory, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn greets_and_exits() {
    let (_, out) = run("7\n");
    assert!(out.starts_with("WELCOME!\n"));
    assert!(out.contains("*** Refrigerator Menu ***"));
    assert!(out.trim_end().ends_with("Exiting program. Goodbye!"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let (inv, out) = run("1\nmilk\n");
    assert!(out.trim_end().ends_with("Exiting program. Goodbye!"));
    assert!(inv.is_empty());
}

#[test]
fn insert_twice_then_status() {
    let (_, out) = run("1\nmilk\n2\n2025-05-01\n1\nmilk\n3\n2025-05-10\n3\n7\n");
    assert!(out.contains("--- Current Refrigerator Status ---"));
    assert!(out.contains("- milk: 5 (Expires: 2025-05-01)"));
}

#[test]
fn consume_everything_then_status_and_history() {
    let (_, out) = run("1\neggs\n12\n2025-04-01\n2\neggs\n12\n3\n4\n7\n");
    assert!(out.contains("The refrigerator is empty."));
    assert!(out.contains("- Inserted 12 of eggs\n- Consumed 12 of eggs\n"));
}

#[test]
fn shopping_list_after_consumption() {
    let (_, out) = run("1\njuice\n4\n2025-03-01\n2\njuice\n2\n6\n7\n");
    assert!(out.contains("--- Generated Shopping List ---"));
    assert!(out.contains("- Buy more juice (2)"));
}

#[test]
fn consuming_unknown_item_reports_and_records_nothing() {
    let (inv, out) = run("2\nbread\n1\n4\n7\n");
    assert!(out.contains("Error: item 'bread' not found."));
    assert!(out.contains("No actions recorded yet."));
    assert!(inv.log().is_empty());
}

#[test]
fn over_consumption_and_bad_quantities_are_reported() {
    let (inv, out) = run(concat!(
        "1\nrice\n1\n2030-01-01\n",
        "2\nrice\n5\n",
        "1\nrice\n0\n2030-01-01\n",
        "2\nrice\nlots\n",
        "7\n",
    ));
    assert!(out.contains("Error: not enough rice to consume (requested 5, available 1)."));
    assert!(out.contains("Error: item quantity must be greater than zero."));
    assert!(out.contains("Invalid quantity. Please enter a number."));
    assert_eq!(inv.ledger().get("rice").map(|i| i.quantity()), Some(1.0));
    assert_eq!(inv.log().len(), 1);
}

#[test]
fn names_may_contain_spaces() {
    let (inv, out) = run("1\norange juice\n1\n2025-03-01\n3\n7\n");
    assert!(out.contains("- orange juice: 1 (Expires: 2025-03-01)"));
    assert!(inv.ledger().get("orange juice").is_some());
}

#[test]
fn expiration_sweep_reports_each_expired_item() {
    let (inv, out) = run(concat!(
        "1\nyogurt\n1\n2025-05-31\n",
        "1\nbutter\n1\n2025-06-01\n",
        "1\ncheese\n1\n2025-06-02\n",
        "5\n2025-06-01\n",
        "5\n2025-06-01\n",
        "7\n",
    ));

    assert!(out.contains("Product yogurt has expired. Please remove it."));
    assert!(out.contains("Product butter has expired. Please remove it."));
    assert!(!out.contains("Product cheese has expired"));
    assert!(out.contains("No expired products found."));

    let left: HashSet<&str> = inv.status().map(|i| i.name()).collect();
    assert_eq!(left, HashSet::from(["cheese"]));
}

#[test]
fn invalid_menu_choice_is_reported() {
    let (_, out) = run("9\nabc\n7\n");
    assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
}

#[test]
fn blank_sweep_date_means_today() {
    let (inv, out) = run(concat!(
        "1\nsardines\n2\n2000-01-01\n",
        "1\npickles\n1\n9999-12-31\n",
        "5\n\n",
        "7\n",
    ));

    assert!(out.contains("Product sardines has expired. Please remove it."));
    assert!(!out.contains("Product pickles has expired"));
    assert!(inv.ledger().get("sardines").is_none());
    assert!(inv.ledger().get("pickles").is_some());
}

#[test]
fn non_iso_expiration_date_is_still_accepted() {
    let (inv, out) = run("1\nbeans\n1\nsoon\n3\n7\n");
    assert!(out.contains("- beans: 1 (Expires: soon)"));
    assert!(!inv.ledger().get("beans").unwrap().expiration_date().is_iso_date());
}

#[test]
fn blank_name_or_date_is_reported_and_not_stored() {
    let (inv, out) = run("1\n\n1\n2025-05-01\n1\nmilk\n1\n\n4\n7\n");
    assert!(out.contains("Error: item name cannot be empty."));
    assert!(out.contains("Error: expiration date cannot be empty."));
    assert!(out.contains("No actions recorded yet."));
    assert!(inv.is_empty());
}
