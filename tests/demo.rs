use contact_table::demo::{self, DEMO_TABLE_SIZE};
use contact_table::Contact;

const EMPTY_TABLE: &str = "\
Index 0: Empty
Index 1: Empty
Index 2: Empty
Index 3: Empty
Index 4: Empty
Index 5: Empty
Index 6: Empty
Index 7: Empty
Index 8: Empty
Index 9: Empty
";

const FILLED_TABLE: &str = "\
Index 0: Empty
Index 1: Empty
Index 2: Empty
Index 3: Empty
Index 4: Empty
Index 5: - Amy: 111-222-3333 - May: 222-333-1111
Index 6: Empty
Index 7: - Rebecca: 999-444-9999
Index 8: Empty
Index 9: - John: 909-876-1234
";

#[test]
fn transcript_matches_expected_output() {
    let mut out = Vec::new();
    demo::run(&mut out).expect("demo never fails on an in-memory sink");
    let text = String::from_utf8(out).unwrap();

    let expected = format!(
        "{}\nInserting contacts...\n\n{}\nSearch results:\nJohn -> John: 909-876-1234\nChris -> None\n",
        EMPTY_TABLE, FILLED_TABLE
    );
    assert_eq!(text, expected);
}

#[test]
fn final_state_is_returned() {
    let table = demo::run(&mut std::io::sink()).unwrap();
    assert_eq!(table.size(), DEMO_TABLE_SIZE);
    assert_eq!(
        table.search("Rebecca"),
        Some(&Contact::new("Rebecca", "999-444-9999"))
    );
    assert!(table.search("Chris").is_none());
}
