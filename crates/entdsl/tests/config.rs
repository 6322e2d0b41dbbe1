use entdsl::prelude::*;

fn fleet() -> Model {
    let key = || {
        Field::new("id", NeutralType::Integer)
            .with_annotation(AnnotationRecord::flag(AnnotationName::Id))
    };

    Model::new("fleet")
        .with_entity(
            Entity::new("Driver")
                .with_field(key())
                .with_field(Field::new("car", FieldTypeRef::entity("Car"))),
        )
        .with_entity(
            Entity::new("Car")
                .with_field(key())
                .with_field(
                    Field::new("drivers", FieldTypeRef::entity("Driver"))
                        .with_cardinality(CARDINALITY_MANY),
                ),
        )
}

#[test]
fn empty_block_is_rejected_by_default() {
    let err = parser(&Config::default()).parse("{}").unwrap_err();

    assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::EmptyBlock));
    assert_eq!(Error::from(err).kind, ErrorKind::Syntax);
}

#[test]
fn empty_block_can_be_allowed() {
    let config = Config::from_toml_str("[annotations]\nallow_empty_block = true\n").unwrap();

    assert!(parser(&config).parse("{}").unwrap().is_empty());
    assert!(parser(&config).parse("{   };").unwrap().is_empty());
}

#[test]
fn link_and_table_settings_flow_into_the_model() {
    let config = Config::from_toml_str(
        r#"
        [entity]
        table_type = "VIEW"

        [link]
        id_prefix = "Rel"
        collection_type = "Set"
        "#,
    )
    .unwrap();
    let model = resolve(&fleet(), &config).unwrap();

    let car = model.entity_by_class_name("Car").unwrap();
    assert_eq!(car.database.table_type, "VIEW");
    assert_eq!(car.links()[0].field_type, "Set<Driver>");

    let ids: Vec<_> = model
        .entities()
        .iter()
        .flat_map(|e| e.links().iter().map(|l| l.id.as_str()))
        .collect();
    assert_eq!(ids, ["Rel2", "Rel1"]);
}

#[test]
fn unknown_keys_are_config_errors() {
    let err: Error = Config::from_toml_str("[link]\nprefix = \"L\"\n")
        .unwrap_err()
        .into();

    assert_eq!(err.kind, ErrorKind::Config);
    assert_eq!(err.origin, ErrorOrigin::Config);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let config = Config::load_or_default("does/not/exist/entdsl.toml").unwrap();

    assert_eq!(config, Config::default());
    assert!(Config::load("does/not/exist/entdsl.toml").is_err());
}

#[test]
fn resolved_model_serializes_to_json() {
    let model = resolve_default(&fleet()).unwrap();
    let json = serde_json::to_value(&model).unwrap();

    assert_eq!(json["name"], "fleet");
    assert_eq!(json["entities"][0]["class_name"], "Car");
    assert_eq!(json["entities"][1]["class_name"], "Driver");

    let fk = &json["entities"][1]["attributes"][1];
    assert_eq!(fk["name"], "car");
    assert_eq!(fk["neutral_type"], "integer");
    assert_eq!(fk["fk_simple"], true);
    assert_eq!(fk["referenced_entity"], "Car");

    let link = &json["entities"][0]["links"][0];
    assert_eq!(link["cardinality"], "OneToMany");
    assert_eq!(link["field_type"], "List<Driver>");
}
