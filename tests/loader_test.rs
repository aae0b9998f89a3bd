use raml_resolver::raml_model::{ActionType, ParamType, RamlError};
use raml_resolver::{load_applied, load_path, load_str, LoadError};
use serde_yaml::Value;
use std::io::Write;

const LIBRARY: &str = include_str!("fixtures/library.yaml");

#[test]
fn test_document_fields_are_bound() {
    let raml = load_str(LIBRARY).expect("fixture loads");

    assert_eq!(raml.title, "Library API");
    assert_eq!(raml.version.as_deref(), Some("v1"));
    assert_eq!(raml.base_uri(), "http://api.library.example.com/{version}");
    assert_eq!(raml.uri_parameters["version"].enum_values, vec![Value::from("v1")]);
    assert_eq!(raml.documentation.len(), 1);
    assert_eq!(raml.documentation[0].title, "Overview");
    assert_eq!(raml.traits().len(), 3);
    assert_eq!(
        raml.trait_named("paged").unwrap().display_name.as_deref(),
        Some("Paged")
    );
    assert_eq!(raml.resource_count(), 5);
}

#[test]
fn test_resources_nest_with_actions_and_uses() {
    let raml = load_str(LIBRARY).unwrap();

    let books = raml.resolve("/books").unwrap().unwrap();
    assert_eq!(books.display_name.as_deref(), Some("Books"));
    assert_eq!(books.uses(), ["paged", "secured"]);
    assert_eq!(
        books.action(ActionType::Get).unwrap().description.as_deref(),
        Some("List books")
    );

    let isbn = raml.resolve("/books/{isbn}").unwrap().unwrap();
    let param = &isbn.uri_parameters["isbn"];
    assert_eq!(param.param_type, ParamType::String);
    assert!(param.required);
    assert_eq!(param.pattern.as_deref(), Some("^[0-9-]+$"));
    assert!(isbn.has_action(ActionType::Delete));

    let loans = raml.resolve("/books/{isbn}/loans").unwrap().unwrap();
    assert_eq!(loans.uri(), "/books/{isbn}/loans");
}

#[test]
fn test_templated_base_uri_resolves_qualified_paths() {
    let raml = load_applied(LIBRARY).unwrap();

    let qualified = raml
        .resolve("http://api.library.example.com/{version}/books/{isbn}")
        .unwrap()
        .unwrap();
    assert_eq!(qualified.uri(), "/books/{isbn}");

    let host_relative = raml.resolve("/{version}/books").unwrap().unwrap();
    assert_eq!(host_relative.uri(), "/books");

    let shelves = raml.resolve("/bookshelves").unwrap().unwrap();
    assert_eq!(shelves.uri(), "/bookshelves");
    assert!(raml.resolve("/book").unwrap().is_none());
}

#[test]
fn test_traits_are_merged_after_loading() {
    let raml = load_applied(LIBRARY).unwrap();

    let books = raml.resolve("/books").unwrap().unwrap();
    let get = books.action(ActionType::Get).unwrap();
    assert_eq!(get.description.as_deref(), Some("List books"));
    assert!(get.query_parameters.contains_key("page"));
    assert!(get.headers.contains_key("Authorization"));
    assert!(get.responses.contains_key(&Value::from(401)));
    // unconditional `post` from `audited` is in the working set, but books does not use it
    assert!(!books
        .action(ActionType::Post)
        .unwrap()
        .headers
        .contains_key("X-Audit-Id"));
    assert!(!books.has_action(ActionType::Delete));

    let isbn = raml.resolve("/books/{isbn}").unwrap().unwrap();
    assert!(isbn
        .action(ActionType::Delete)
        .unwrap()
        .headers
        .contains_key("Authorization"));
    assert!(!isbn.action(ActionType::Get).unwrap().query_parameters.contains_key("page"));

    let loans = raml.resolve("/books/{isbn}/loans").unwrap().unwrap();
    assert!(loans
        .action(ActionType::Post)
        .unwrap()
        .headers
        .contains_key("X-Audit-Id"));
    assert!(loans.action(ActionType::Get).unwrap().query_parameters.contains_key("size"));

    let shelves = raml.resolve("/bookshelves").unwrap().unwrap();
    assert_eq!(shelves.actions().len(), 1);

    let members = raml.resolve("/members").unwrap().unwrap();
    assert!(!members.has_action(ActionType::Get));
    assert!(members.has_action(ActionType::Post));
}

#[test]
fn test_undefined_trait_fails_application() {
    let yaml = "title: T\nbaseUri: http://x.example.com\n/a:\n  use: [nowhere]\n  get:\n";
    assert!(load_str(yaml).is_ok());

    let err = load_applied(yaml).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Model(RamlError::MissingTrait { ref name, ref resource })
            if name == "nowhere" && resource == "/a"
    ));
}

#[test]
fn test_invalid_trait_token_fails_application() {
    let yaml = "\
title: T
baseUri: http://x.example.com
traits:
  odd:
    provides:
      fetch?:
/a:
  get:
";
    let err = load_applied(yaml).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Model(RamlError::InvalidActionType(ref token)) if token == "fetch?"
    ));
}

#[test]
fn test_numeric_uri_parameter_values_bind_at_any_depth() {
    let yaml = "\
title: T
baseUri: http://x.example.com/{version}
uriParameters:
  version:
    enum: [1, 2]
/items:
  /{id}:
    uriParameters:
      id: {type: integer, example: 5, default: 1, enum: [1, 5]}
    get:
";
    let raml = load_applied(yaml).unwrap();
    assert_eq!(
        raml.uri_parameters["version"].enum_values,
        vec![Value::from(1), Value::from(2)]
    );

    let item = raml.resolve("/items/{id}").unwrap().unwrap();
    let id = &item.uri_parameters["id"];
    assert_eq!(id.param_type, ParamType::Integer);
    assert_eq!(id.example, Some(Value::from(5)));
    assert_eq!(id.default, Some(Value::from(1)));
    assert_eq!(id.enum_values, vec![Value::from(1), Value::from(5)]);
    assert!(item.has_action(ActionType::Get));
}

#[test]
fn test_load_path_reads_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LIBRARY.as_bytes()).unwrap();

    let raml = load_path(file.path()).unwrap();
    assert_eq!(raml.title, "Library API");

    let missing = load_path(file.path().with_extension("missing")).unwrap_err();
    assert!(matches!(missing, LoadError::Io { .. }));
}
