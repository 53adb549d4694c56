use objstream::{
    apple_meta, banana_meta, decode, decode_str, register_builtin_objects, Apple, Banana,
    DecodeError, ObjectRegistry,
};

fn builtin_registry() -> ObjectRegistry {
    let mut registry = ObjectRegistry::new();
    register_builtin_objects(&mut registry);
    registry
}

#[test]
fn test_decode_two_document_yaml_stream_in_order() {
    let registry = builtin_registry();
    let input = "
type_name: Apple
color: Red
---
type_name: Banana
ripe: true
";

    let objects = decode(input.as_bytes(), &registry).unwrap();
    assert_eq!(objects.len(), 2);

    let apple = objects[0].downcast_ref::<Apple>().unwrap();
    assert_eq!(apple.color, "Red");
    let banana = objects[1].downcast_ref::<Banana>().unwrap();
    assert!(banana.ripe);
}

#[test]
fn test_decoded_objects_report_their_registered_tags() {
    let registry = builtin_registry();
    let input = "type_name: Apple\ncolor: Red\n---\ntype_name: Banana\nripe: false\n";

    let objects = decode_str(input, &registry).unwrap();
    assert_eq!(objects[0].type_meta(), apple_meta());
    assert_eq!(objects[1].type_meta(), banana_meta());
}

#[test]
fn test_round_trip_through_encoded_document() {
    let registry = builtin_registry();
    let apple = Apple {
        meta: apple_meta(),
        color: "Green".to_string(),
    };

    let document = serde_json::to_string(&apple).unwrap();
    let objects = decode_str(&document, &registry).unwrap();

    assert_eq!(objects.len(), 1);
    let decoded = objects[0].downcast_ref::<Apple>().unwrap();
    assert_eq!(decoded, &apple);
}

#[test]
fn test_order_preserved_across_many_documents() {
    let registry = builtin_registry();
    let count = 10;
    let mut input = String::new();
    for i in 0..count {
        if i % 2 == 0 {
            input.push_str(&format!("type_name: Apple\ncolor: shade-{i}\n"));
        } else {
            input.push_str("type_name: Banana\nripe: true\n");
        }
        input.push_str("---\n");
    }

    let objects = decode_str(&input, &registry).unwrap();
    assert_eq!(objects.len(), count);
    for (i, object) in objects.iter().enumerate() {
        if i % 2 == 0 {
            let apple = object.downcast_ref::<Apple>().unwrap();
            assert_eq!(apple.color, format!("shade-{i}"));
        } else {
            assert!(object.downcast_ref::<Banana>().is_some());
        }
    }
}

#[test]
fn test_empty_stream_is_not_an_error() {
    let registry = builtin_registry();
    let objects = decode("".as_bytes(), &registry).unwrap();
    assert!(objects.is_empty());
}

#[test]
fn test_unregistered_type_fails_whole_decode() {
    let registry = builtin_registry();
    let input = "
type_name: Cherry
size: small
---
type_name: Apple
color: Red
";

    let err = decode_str(input, &registry).unwrap_err();
    match err {
        DecodeError::UnknownType { index, ref type_name } => {
            assert_eq!(index, 0);
            assert_eq!(type_name, "Cherry");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("Cherry"));
}

#[test]
fn test_malformed_yaml_reports_document_index() {
    let registry = builtin_registry();
    let input = "type_name: Apple\ncolor: Red\n---\nsize: [unclosed\n";

    let err = decode_str(input, &registry).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MalformedDocument { index: 1, .. }
    ));
}
