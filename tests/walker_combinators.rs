use elementwise::{Key, Value, Walker};

#[test]
fn new_assigns_index_keys_in_order() {
    let walker = Walker::new([10i64, 20, 30]);
    let keys: Vec<Key> = walker.keys().cloned().collect();
    assert_eq!(keys, vec![Key::Int(0), Key::Int(1), Key::Int(2)]);
    assert_eq!(
        walker.to_vec(),
        vec![Value::Int(10), Value::Int(20), Value::Int(30)]
    );
}

#[test]
fn from_entries_preserves_insertion_order_and_overwrites_duplicates() {
    let walker = Walker::from_entries([("first", 1i64), ("second", 2), ("first", 3)]);
    assert_eq!(walker.len(), 2);
    let keys: Vec<String> = walker.keys().map(Key::to_string).collect();
    assert_eq!(keys, ["first", "second"]);
    assert_eq!(walker.get(&Key::from("first")), Some(&Value::Int(3)));
}

#[test]
fn try_from_accepts_arrays_and_rejects_scalars() {
    let walker = Walker::try_from(Value::array(vec![Value::Int(1)])).unwrap();
    assert_eq!(walker.to_vec(), vec![Value::Int(1)]);

    let err = Walker::try_from(Value::Str("abc".into())).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn walk_does_not_invoke_callback_for_empty_collection() {
    let mut walker = Walker::new(Vec::<Value>::new());
    let mut invoked = 0;
    assert!(walker.walk(|_, _| invoked += 1));
    assert_eq!(invoked, 0);
}

#[test]
fn walk_invokes_callback_once_per_element_in_order() {
    let mut walker = Walker::from_entries([("first", 1i64), ("second", 2)]);
    let mut seen = Vec::new();
    walker.walk(|element, key| seen.push((key.to_string(), element.clone())));
    assert_eq!(
        seen,
        vec![
            ("first".to_string(), Value::Int(1)),
            ("second".to_string(), Value::Int(2)),
        ]
    );
}

#[test]
fn walk_callback_can_change_stored_values() {
    let source = vec![Value::Int(1), Value::Int(2), Value::Int(3)];
    let mut walker = Walker::new(source.clone());

    walker.walk(|element, _| {
        if let Value::Int(i) = element {
            *i *= 10;
        }
    });

    assert_eq!(
        walker.to_vec(),
        vec![Value::Int(10), Value::Int(20), Value::Int(30)]
    );
    // the source the walker was built from is untouched
    assert_eq!(source, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn each_returns_the_same_instance() {
    let mut walker = Walker::new(["x"]);
    let before: *const Walker = &walker;
    let after: *const Walker = walker.each(|_, _| {});
    assert!(std::ptr::eq(before, after));
}

#[test]
fn each_chains_in_place_passes() {
    let mut walker = Walker::new([1i64, 2]);
    walker
        .each(|element, _| {
            if let Value::Int(i) = element {
                *i += 1;
            }
        })
        .each(|element, _| {
            if let Value::Int(i) = element {
                *i *= 2;
            }
        });
    assert_eq!(walker.to_vec(), vec![Value::Int(4), Value::Int(6)]);
}

#[test]
fn map_returns_empty_walker_without_invoking_for_empty_collection() {
    let walker = Walker::new(Vec::<Value>::new());
    let mut invoked = false;
    let result = walker.map(|element| {
        invoked = true;
        element.clone()
    });
    assert!(result.is_empty());
    assert!(!invoked);
}

#[test]
fn map_collects_results_keyed_like_the_source() {
    let walker = Walker::from_entries([("a", "*A*"), ("b", "*B*")]);
    let result = walker.map(|element| {
        Value::Str(element.to_string_value().trim_matches('*').to_string())
    });

    let keys: Vec<String> = result.keys().map(Key::to_string).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(result, Walker::from_entries([("a", "A"), ("b", "B")]));
    // source unchanged
    assert_eq!(walker.to_vec(), vec![Value::from("*A*"), Value::from("*B*")]);
}

#[test]
fn apply_invokes_callback_with_the_current_element_and_key() {
    let mut walker = Walker::from_entries([("first", 123i64), ("second", 456)]);

    let first = walker.apply(|element, key| (element.clone(), key.clone()));
    assert_eq!(first, Some((Value::Int(123), Key::from("first"))));

    walker.advance();
    let second = walker.apply(|element, key| (element.clone(), key.clone()));
    assert_eq!(second, Some((Value::Int(456), Key::from("second"))));
}

#[test]
fn apply_does_nothing_past_the_end() {
    let mut walker = Walker::new(Vec::<Value>::new());
    let mut invoked = false;
    let result = walker.apply(|_, _| invoked = true);
    assert!(result.is_none());
    assert!(!invoked);
    assert!(!walker.valid());
}

#[test]
fn apply_mutates_only_the_current_element() {
    let mut walker = Walker::new([" A ", " B ", " C "]);
    walker.apply(|element, _| {
        *element = Value::Str(element.to_string_value().trim().to_lowercase());
    });
    assert_eq!(
        walker.to_vec(),
        vec![Value::from("a"), Value::from(" B "), Value::from(" C ")]
    );
}

#[test]
fn cursor_rewinds_and_reports_validity() {
    let mut walker = Walker::new([1i64, 2]);
    assert!(walker.valid());
    assert_eq!(walker.key(), Some(&Key::Int(0)));

    walker.advance();
    assert_eq!(walker.current(), Some(&Value::Int(2)));

    walker.advance();
    assert!(!walker.valid());
    assert_eq!(walker.current(), None);

    walker.rewind();
    assert_eq!(walker.current(), Some(&Value::Int(1)));
}

#[test]
fn set_overwrites_in_place_and_appends_new_keys() {
    let mut walker = Walker::from_entries([("a", 1i64), ("b", 2)]);
    walker.set("a", 10i64);
    walker.set("c", 3i64);

    let keys: Vec<String> = walker.keys().map(Key::to_string).collect();
    assert_eq!(keys, ["a", "b", "c"]);
    assert_eq!(walker.get(&Key::from("a")), Some(&Value::Int(10)));
}

#[test]
fn into_iterator_yields_entries_in_order() {
    let walker = Walker::from_entries([("x", 1i64), ("y", 2)]);
    let entries: Vec<(Key, Value)> = walker.into_iter().collect();
    assert_eq!(
        entries,
        vec![
            (Key::from("x"), Value::Int(1)),
            (Key::from("y"), Value::Int(2)),
        ]
    );
}
