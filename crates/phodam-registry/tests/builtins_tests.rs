//! Integration tests for the built-in providers registered by `with_defaults`

#![cfg(feature = "builtins")]

use phodam_core::{CreateRequest, FieldDefinition, PhodamError, TypeDefinition};
use phodam_registry::{Phodam, PhodamSettings};
use rstest::*;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct Account {
	id: i64,
	email: String,
	display_name: String,
	token: String,
	joined: String,
	balance: Option<f64>,
	tags: Vec<String>,
}

#[fixture]
fn phodam() -> Phodam {
	let phodam = Phodam::with_defaults().unwrap();
	phodam
		.register_type_definition(
			TypeDefinition::new("app.Account")
				.with_field("id", FieldDefinition::new("int"))
				.with_field("email", FieldDefinition::new("string").with_name("email"))
				.with_field("display_name", FieldDefinition::new("string").with_name("name"))
				.with_field("active", FieldDefinition::new("bool"))
				.with_field("token", FieldDefinition::new("uuid"))
				.with_field("joined", FieldDefinition::new("datetime"))
				.with_field("balance", FieldDefinition::new("float").with_nullable(true))
				.with_field("tags", FieldDefinition::new("string").with_array(true)),
		)
		.unwrap();
	phodam
}

#[rstest]
fn with_defaults_registers_builtin_types(phodam: Phodam) {
	// Assert
	for type_id in ["int", "float", "string", "bool", "uuid", "datetime"] {
		assert!(phodam.has_provider(type_id, None), "missing {type_id}");
	}
	for name in ["email", "name", "username"] {
		assert!(phodam.has_provider("string", Some(name)), "missing string#{name}");
	}
}

#[rstest]
fn definition_over_builtins_deserializes(phodam: Phodam) {
	// Act
	let account: Account = phodam.create_as("app.Account").unwrap();

	// Assert
	assert!(account.id >= 0);
	assert!(account.email.contains('@'));
	assert!(!account.display_name.is_empty());
	assert_eq!(account.token.len(), 36);
	assert!(account.joined.ends_with('Z'));
	assert!(account.balance.is_some());
	assert!((2..=5).contains(&account.tags.len()));
}

#[rstest]
fn invalid_builtin_config_fails_creation(phodam: Phodam) {
	// Act
	let error = phodam
		.create(
			CreateRequest::new("int")
				.with_config_value("min", json!(10))
				.with_config_value("max", json!(1)),
		)
		.unwrap_err();

	// Assert
	assert!(matches!(error, PhodamError::CreationFailed { ref type_id, .. } if type_id == "int"));
	assert!(matches!(error.root_cause(), PhodamError::InvalidConfig { .. }));
}

#[rstest]
fn field_config_narrows_builtin_range() {
	// Arrange
	let phodam = Phodam::with_defaults_and_settings(PhodamSettings::default().with_array_len(3, 3))
		.unwrap();
	let mut config = serde_json::Map::new();
	config.insert("min".to_string(), json!(1));
	config.insert("max".to_string(), json!(6));
	phodam
		.register_type_definition(TypeDefinition::new("app.Dice").with_field(
			"rolls",
			FieldDefinition::new("int").with_config(config).with_array(true),
		))
		.unwrap();

	// Act
	let dice = phodam.create("app.Dice").unwrap();

	// Assert
	let rolls = dice["rolls"].as_array().unwrap();
	assert_eq!(rolls.len(), 3);
	assert!(rolls.iter().all(|roll| (1..=6).contains(&roll.as_i64().unwrap())));
}

#[rstest]
fn builtins_can_be_overridden(phodam: Phodam) {
	// Arrange
	phodam
		.register_provider(
			phodam_core::ProviderRegistration::new(
				"string",
				phodam_core::provider_fn(|_| Ok(json!("fixed"))),
			)
			.with_name("email")
			.with_overriding(true),
		)
		.unwrap();

	// Act
	let account = phodam.create("app.Account").unwrap();

	// Assert
	assert_eq!(account["email"], json!("fixed"));
}
