use contact_table::ContactTable;
use proptest::prelude::*;
use std::collections::HashMap;

// Model insert sequences on ContactTable against a HashMap of latest numbers.
proptest! {
    #[test]
    fn prop_lookup_returns_latest_number(
        size in 1usize..=12,
        ops in proptest::collection::vec(("[a-e]{0,3}", "[0-9]{3}"), 1..80),
        probes in proptest::collection::vec("[a-f]{0,3}", 0..20),
    ) {
        let mut t = ContactTable::new(size).unwrap();
        let mut model: HashMap<String, String> = HashMap::new();

        for (name, number) in ops {
            t.insert(name.clone(), number.clone());
            model.insert(name, number);
        }

        prop_assert_eq!(t.len(), model.len());
        for (name, number) in &model {
            let found = t.search(name);
            prop_assert!(found.is_some());
            let c = found.unwrap();
            prop_assert_eq!(&c.name, name);
            prop_assert_eq!(&c.number, number);
        }
        // Never-inserted names come back as None, not a contact.
        for name in probes {
            prop_assert_eq!(t.search(&name).is_some(), model.contains_key(&name));
        }

        // Every bucket holds only keys that hash there; total count matches.
        let mut total = 0;
        for b in 0..t.size() {
            for c in t.bucket(b).unwrap() {
                prop_assert_eq!(t.hash(&c.name), b);
                total += 1;
            }
        }
        prop_assert_eq!(total, model.len());
        prop_assert_eq!(t.display().lines().count(), size);
    }
}
