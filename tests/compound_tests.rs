use nbt_path::{
    Compound, TagID, TagMatch, Value,
    tag::{Compound as CompoundTag, Int, Long, String},
};

#[test]
fn test_insert_get_remove() {
    let mut compound = Compound::new();
    assert!(compound.is_empty());

    assert_eq!(compound.insert("a", 1i32), None);
    assert_eq!(compound.insert("a", 2i64), Some(Value::Int(1)));
    assert_eq!(compound.len(), 1);
    assert_eq!(compound.get("a"), Some(&Value::Long(2)));
    assert!(compound.contains_key("a"));

    assert_eq!(compound.remove("a"), Some(Value::Long(2)));
    assert_eq!(compound.remove("a"), None);
    assert!(!compound.contains_key("a"));
}

#[test]
fn test_typed_get_treats_mismatch_as_absent() {
    let mut compound = Compound::new();
    compound.insert("n", 10i32);
    compound.insert("s", "text");

    assert_eq!(compound.get_::<Int>("n"), Some(&10));
    assert_eq!(compound.get_::<Long>("n"), None);
    assert_eq!(compound.get_::<String>("s").map(|s| s.as_str()), Some("text"));
    assert_eq!(compound.get_::<Int>("s"), None);
    assert_eq!(compound.get_::<Int>("missing"), None);
}

#[test]
fn test_get_mut_() {
    let mut compound = Compound::new();
    compound.insert("n", 10i32);
    *compound.get_mut_::<Int>("n").unwrap() += 5;
    assert_eq!(compound.get_::<Int>("n"), Some(&15));
    assert!(compound.get_mut_::<Long>("n").is_none());

    if let Some(Value::Int(n)) = compound.get_mut("n") {
        *n = 0;
    }
    assert_eq!(compound.get("n"), Some(&Value::Int(0)));
}

#[test]
fn test_contains_key_of() {
    let compound: Compound = [
        ("b", Value::Byte(1)),
        ("f", Value::Float(1.0)),
        ("s", Value::from("x")),
        ("c", Value::Compound(Compound::new())),
        ("ia", Value::IntArray(vec![1])),
    ]
    .into_iter()
    .collect();

    assert!(compound.contains_key_of("b", TagID::Byte));
    assert!(!compound.contains_key_of("b", TagID::Short));
    assert!(compound.contains_key_of("b", TagMatch::AnyNumeric));
    assert!(compound.contains_key_of("f", TagMatch::AnyNumeric));
    assert!(!compound.contains_key_of("s", TagMatch::AnyNumeric));
    assert!(!compound.contains_key_of("ia", TagMatch::AnyNumeric));
    assert!(compound.contains_key_of("c", TagID::Compound));
    assert!(!compound.contains_key_of("missing", TagMatch::AnyNumeric));
}

#[test]
fn test_iteration_and_extend() {
    let mut compound = Compound::new();
    compound.extend([("x", 1i32), ("y", 2i32)]);
    compound.extend(vec![("z", Value::from(3i32))]);

    let mut keys: Vec<_> = compound.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["x", "y", "z"]);

    let sum: i32 = compound.iter().filter_map(|(_, v)| v.as_int()).sum();
    assert_eq!(sum, 6);

    for (_, value) in compound.iter_mut() {
        if let Value::Int(n) = value {
            *n *= 10;
        }
    }
    let sum: i32 = (&compound).into_iter().filter_map(|(_, v)| v.as_int()).sum();
    assert_eq!(sum, 60);

    let owned: Vec<(std::string::String, Value)> = compound.into_iter().collect();
    assert_eq!(owned.len(), 3);
}

#[test]
fn test_nested_compound() {
    let mut inner = Compound::new();
    inner.insert("leaf", 1i32);
    let mut outer = Compound::new();
    outer.insert("inner", inner.clone());

    assert_eq!(outer.get_::<CompoundTag>("inner"), Some(&inner));
    outer
        .get_mut_::<CompoundTag>("inner")
        .unwrap()
        .insert("leaf", 2i32);
    assert_eq!(
        outer.get_::<CompoundTag>("inner").unwrap().get_::<Int>("leaf"),
        Some(&2)
    );
}
