use std::collections::BTreeSet;

use crate::naming::identifiers::{
  camel_to_snake, ensure_unique, sanitize, snake_to_camel, to_namespace_name, to_property_key, to_type_name,
};

#[test]
fn test_snake_to_camel() {
  assert_eq!(snake_to_camel("pet_id"), "petId");
  assert_eq!(snake_to_camel("created_at_utc"), "createdAtUtc");
  assert_eq!(snake_to_camel("content-type"), "contentType");
  assert_eq!(snake_to_camel("petId"), "petId");
  assert_eq!(snake_to_camel(""), "");
}

#[test]
fn test_snake_to_camel_collapses_separator_runs() {
  assert_eq!(snake_to_camel("pet__id"), "petId");
  assert_eq!(snake_to_camel("pet--id"), "petId");
  assert_eq!(snake_to_camel("_private"), "Private");
}

#[test]
fn test_camel_to_snake() {
  assert_eq!(camel_to_snake("petId"), "pet_id");
  assert_eq!(camel_to_snake("createdAtUtc"), "created_at_utc");
  assert_eq!(camel_to_snake("userID"), "user_id");
  assert_eq!(camel_to_snake("ABC"), "abc");
  assert_eq!(camel_to_snake("pet_id"), "pet_id");
  assert_eq!(camel_to_snake("PetId"), "pet_id");
}

#[test]
fn test_camel_to_snake_never_leads_with_underscore() {
  for input in ["Pet", "PetStore", "URL", "X1"] {
    assert!(!camel_to_snake(input).starts_with('_'), "{input}");
  }
}

#[test]
fn test_case_round_trip_for_simple_snake_identifiers() {
  for input in ["pet_id", "name", "created_at", "order_line_item"] {
    assert_eq!(camel_to_snake(&snake_to_camel(input)), input);
  }
}

#[test]
fn test_property_keys() {
  assert_eq!(to_property_key("name"), "name");
  assert_eq!(to_property_key("$ref"), "$ref");
  assert_eq!(to_property_key("_id"), "_id");
  assert_eq!(to_property_key("content-type"), "'content-type'");
  assert_eq!(to_property_key("1st"), "'1st'");
  assert_eq!(to_property_key("it's"), r"'it\'s'");
}

#[test]
fn test_namespace_names() {
  assert_eq!(to_namespace_name("Swagger Petstore"), "SwaggerPetstore");
  assert_eq!(to_namespace_name("pet-store api"), "PetStoreApi");
  assert_eq!(to_namespace_name("Café Menu"), "CafeMenu");
  assert_eq!(to_namespace_name("2 pets"), "Api2Pets");
  assert_eq!(to_namespace_name(""), "Api");
  assert_eq!(to_namespace_name("  --  "), "Api");
}

#[test]
fn test_type_names() {
  assert_eq!(to_type_name("Pet"), "Pet");
  assert_eq!(to_type_name("Order.Item"), "Order_Item");
  assert_eq!(to_type_name("pet-type"), "pet_type");
  assert_eq!(to_type_name("200Response"), "_200Response");
  assert_eq!(to_type_name(""), "_");
}

#[test]
fn test_type_names_transliterate() {
  assert_eq!(to_type_name("Café"), "Cafe");
  assert_eq!(to_type_name("Größe"), "Grosse");
  assert_eq!(to_type_name("$Meta"), "$Meta");
}

#[test]
fn test_sanitize() {
  assert_eq!(sanitize(""), "");
  assert_eq!(sanitize("  pet--store  "), "pet_store");
  assert_eq!(sanitize("naïve.name"), "naive_name");
  assert_eq!(sanitize("___"), "");
}

#[test]
fn test_ensure_unique() {
  let mut used = BTreeSet::new();
  assert_eq!(ensure_unique("Pet", &used), "Pet");

  used.insert("Pet".to_string());
  assert_eq!(ensure_unique("Pet", &used), "Pet2");

  used.insert("Pet2".to_string());
  assert_eq!(ensure_unique("Pet", &used), "Pet3");
}
