use serde_json::json;

use crate::{
  generator::{codegen::PropertyCase, orchestrator::Orchestrator},
  naming::operations::operation_name,
  tests::common::{PETSTORE_JSON, petstore_document},
  utils::spec::{SpecFormat, parse_document},
};

fn pet_module() -> String {
  let orchestrator = Orchestrator::new(petstore_document(), None, PropertyCase::default()).unwrap();
  orchestrator
    .generate("fixtures/petstore.json")
    .files
    .into_iter()
    .find(|file| file.path.ends_with("Pet.ts"))
    .map(|file| file.content)
    .unwrap()
}

#[test]
fn test_petstore_parses_from_bytes() {
  let document = parse_document(PETSTORE_JSON.as_bytes(), SpecFormat::Json).unwrap();
  assert_eq!(document, petstore_document());
  assert_eq!(document.openapi, "3.0.0");
  assert_eq!(document.schemas().len(), 5);
}

#[test]
fn test_petstore_normalized_models() {
  let orchestrator = Orchestrator::new(petstore_document(), None, PropertyCase::default()).unwrap();
  let models = orchestrator.normalize();

  assert_eq!(
    serde_json::to_value(&models["Pet"]).unwrap(),
    json!({
      "resolvedType": "any",
      "isRequired": false,
      "isArray": false,
      "isRef": false,
      "enumValues": [],
      "properties": {
        "id": {
          "resolvedType": "number", "isRequired": false, "isArray": false, "isRef": false,
          "enumValues": [], "properties": {}
        },
        "name": {
          "resolvedType": "string", "isRequired": true, "isArray": false, "isRef": false,
          "enumValues": [], "properties": {}
        },
        "category": {
          "resolvedType": "Category", "isRequired": false, "isArray": false, "isRef": true,
          "enumValues": [], "properties": {}
        },
        "photo_urls": {
          "resolvedType": "string", "isRequired": true, "isArray": true, "isRef": false,
          "enumValues": [], "properties": {}
        },
        "tags": {
          "resolvedType": "Tag", "isRequired": false, "isArray": true, "isRef": true,
          "enumValues": [], "properties": {}
        },
        "status": {
          "resolvedType": "string", "isRequired": false, "isArray": false, "isRef": false,
          "enumValues": ["available", "pending", "sold"], "properties": {}
        }
      }
    })
  );

  assert_eq!(models["Status"].enum_values, [json!("placed"), json!("approved"), json!("delivered")]);
  assert_eq!(models["Status"].resolved_type, "string");
}

#[test]
fn test_petstore_pet_module() {
  let pet = pet_module();
  let body = pet.split_once(" */\n\n").map(|(_, body)| body).unwrap();

  assert_eq!(
    body,
    "import { Category } from './Category'
import { Tag } from './Tag'

/**
 * A pet for sale in the pet store.
 */
export interface Pet {
  id?: number
  /**
   * The pet's name.
   */
  name: string
  category?: Category
  photo_urls: string[]
  tags?: Tag[]
  /**
   * pet status in the store
   */
  status?: 'available' | 'pending' | 'sold'
}
"
  );
}

#[test]
fn test_petstore_header() {
  let pet = pet_module();
  assert!(pet.starts_with(
    "/**\n * AUTO-GENERATED CODE - DO NOT EDIT!\n *\n * Swagger Petstore\n * Source: fixtures/petstore.json\n * Version: 1.0.0\n"
  ));
}

#[test]
fn test_petstore_operation_names() {
  let document = petstore_document();
  let names: Vec<_> = document
    .operations()
    .map(|(path, method, operation)| (operation_name(method, operation), path))
    .collect();

  assert_eq!(
    names,
    [
      ("listPets".to_string(), "/pets"),
      ("createPets".to_string(), "/pets"),
      ("showPetById".to_string(), "/pets/{petId}"),
      ("delete".to_string(), "/pets/{petId}"),
    ]
  );
}
