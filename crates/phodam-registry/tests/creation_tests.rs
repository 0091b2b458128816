//! Integration tests for value creation through the facade

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use phodam_core::{
	CreateRequest, FieldDefinition, PhodamError, ProviderRegistration, TypeDefinition, Value,
	provider_fn,
};
use phodam_registry::Phodam;
use rstest::*;
use serde_json::json;

/// Phodam with a counting `int` provider and a `app.User` definition.
#[fixture]
fn users() -> (Phodam, Arc<AtomicUsize>) {
	let calls = Arc::new(AtomicUsize::new(0));
	let phodam = Phodam::new();

	let counter = Arc::clone(&calls);
	phodam
		.register_provider(ProviderRegistration::new(
			"int",
			provider_fn(move |_| Ok(json!(counter.fetch_add(1, Ordering::SeqCst) + 1))),
		))
		.unwrap();
	phodam
		.register_type_definition(
			TypeDefinition::new("app.User")
				.with_field("id", FieldDefinition::new("int"))
				.with_field("name", FieldDefinition::new("string").with_nullable(true)),
		)
		.unwrap();

	(phodam, calls)
}

#[rstest]
fn definition_is_synthesized_field_by_field(users: (Phodam, Arc<AtomicUsize>)) {
	// Arrange
	let (phodam, calls) = users;

	// Act
	let user = phodam.create("app.User").unwrap();

	// Assert
	assert_eq!(user, json!({ "id": 1, "name": null }));
	assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn nullable_field_uses_provider_when_registered(users: (Phodam, Arc<AtomicUsize>)) {
	// Arrange
	let (phodam, _) = users;
	phodam
		.register_provider(ProviderRegistration::new("string", provider_fn(|_| Ok(json!("Ada")))))
		.unwrap();

	// Act
	let user = phodam.create("app.User").unwrap();

	// Assert
	assert_eq!(user["name"], json!("Ada"));
}

#[rstest]
fn override_bypasses_field_provider(users: (Phodam, Arc<AtomicUsize>)) {
	// Arrange
	let (phodam, calls) = users;

	// Act
	let user = phodam
		.create(CreateRequest::new("app.User").with_override("id", json!(42)))
		.unwrap();

	// Assert
	assert_eq!(user["id"], json!(42));
	assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn unknown_override_keys_are_ignored(users: (Phodam, Arc<AtomicUsize>)) {
	// Arrange
	let (phodam, _) = users;

	// Act
	let user = phodam
		.create(CreateRequest::new("app.User").with_override("nickname", json!("ada")))
		.unwrap();

	// Assert
	let fields: Vec<&str> = user.as_object().unwrap().keys().map(String::as_str).collect();
	assert_eq!(fields, vec!["id", "name"]);
}

#[rstest]
fn every_create_invokes_the_provider(users: (Phodam, Arc<AtomicUsize>)) {
	// Arrange
	let (phodam, calls) = users;

	// Act
	let first = phodam.create("int").unwrap();
	let second = phodam.create("int").unwrap();

	// Assert
	assert_eq!(calls.load(Ordering::SeqCst), 2);
	assert_ne!(first, second);
}

#[rstest]
fn context_exposes_overrides() {
	// Arrange
	let seen = Arc::new(Mutex::new(Vec::new()));
	let phodam = Phodam::new();
	let recorder = Arc::clone(&seen);
	phodam
		.register_provider(ProviderRegistration::new(
			"app.Inspector",
			provider_fn(move |context| {
				let mut seen = recorder.lock();
				seen.push(context.has_override("id"));
				seen.push(context.has_override("missing"));
				let id = context.get_override("id")?.clone();
				match context.get_override("missing") {
					Err(PhodamError::OverrideNotFound { field }) => Ok(json!({ "id": id, "missing": field })),
					other => Err(PhodamError::provider(format!("unexpected: {other:?}"))),
				}
			}),
		))
		.unwrap();

	// Act
	let value = phodam
		.create(CreateRequest::new("app.Inspector").with_override("id", json!(7)))
		.unwrap();

	// Assert
	assert_eq!(value, json!({ "id": 7, "missing": "missing" }));
	assert_eq!(*seen.lock(), vec![true, false]);
}

#[rstest]
fn field_config_and_name_reach_the_provider() {
	// Arrange
	let phodam = Phodam::new();
	phodam
		.register_provider(
			ProviderRegistration::new(
				"string",
				provider_fn(|context| {
					let prefix = context.config_str("prefix")?.unwrap_or("none");
					Ok(json!(format!("{}:{}", prefix, context.name().unwrap_or("-"))))
				}),
			)
			.with_name("code"),
		)
		.unwrap();
	let mut config = serde_json::Map::new();
	config.insert("prefix".to_string(), json!("SKU"));
	phodam
		.register_type_definition(TypeDefinition::new("app.Item").with_field(
			"code",
			FieldDefinition::new("string").with_name("code").with_config(config),
		))
		.unwrap();

	// Act
	let item = phodam.create("app.Item").unwrap();

	// Assert
	assert_eq!(item, json!({ "code": "SKU:code" }));
}

/// Phodam whose `app.Order` has a `customer` field with declared overrides.
fn order_with_customer_overrides() -> Phodam {
	let phodam = Phodam::new();
	phodam
		.register_provider(ProviderRegistration::new(
			"app.Customer",
			provider_fn(|context| Ok(Value::Object(context.overrides().clone()))),
		))
		.unwrap();
	let mut customer_overrides = serde_json::Map::new();
	customer_overrides.insert("tier".to_string(), json!("gold"));
	phodam
		.register_type_definition(TypeDefinition::new("app.Order").with_field(
			"customer",
			FieldDefinition::new("app.Customer").with_overrides(customer_overrides),
		))
		.unwrap();
	phodam
}

#[rstest]
fn field_overrides_reach_nested_provider() {
	// Arrange
	let phodam = order_with_customer_overrides();

	// Act
	let order = phodam.create("app.Order").unwrap();

	// Assert
	assert_eq!(order, json!({ "customer": { "tier": "gold" } }));
}

#[rstest]
fn caller_override_replaces_field_overrides() {
	// Arrange
	let phodam = order_with_customer_overrides();

	// Act
	let order = phodam
		.create(CreateRequest::new("app.Order").with_override("customer", json!({ "tier": "basic" })))
		.unwrap();

	// Assert
	assert_eq!(order, json!({ "customer": { "tier": "basic" } }));
}

#[rstest]
fn nested_definitions_are_synthesized() {
	// Arrange
	let phodam = Phodam::new();
	phodam
		.register_provider(ProviderRegistration::new("string", provider_fn(|_| Ok(json!("x")))))
		.unwrap();
	phodam
		.register_type_definition(
			TypeDefinition::new("app.Address").with_field("street", FieldDefinition::new("string")),
		)
		.unwrap();
	phodam
		.register_type_definition(
			TypeDefinition::new("app.Customer")
				.with_field("home", FieldDefinition::new("app.Address"))
				.with_field("previous", FieldDefinition::new("app.Address").with_array(true)),
		)
		.unwrap();

	// Act
	let customer = phodam.create("app.Customer").unwrap();

	// Assert
	assert_eq!(customer["home"], json!({ "street": "x" }));
	let previous = customer["previous"].as_array().unwrap();
	assert!((2..=5).contains(&previous.len()));
	assert!(previous.iter().all(|address| address == &json!({ "street": "x" })));
}

#[rstest]
fn nullable_does_not_hide_deeper_lookup_failures() {
	// Arrange
	let phodam = Phodam::new();
	phodam
		.register_type_definition(
			TypeDefinition::new("app.Address").with_field("zip", FieldDefinition::new("app.Zip")),
		)
		.unwrap();
	phodam
		.register_type_definition(TypeDefinition::new("app.Customer").with_field(
			"home",
			FieldDefinition::new("app.Address").with_nullable(true),
		))
		.unwrap();

	// Act
	let result = phodam.create("app.Customer");

	// Assert
	assert!(
		result
			.as_ref()
			.is_err_and(|error| error.is_provider_not_found_for("app.Zip", None)),
		"unexpected result: {result:?}"
	);
}

#[rstest]
fn nested_failure_is_wrapped_once() {
	// Arrange
	let phodam = Phodam::new();
	phodam
		.register_provider(ProviderRegistration::new(
			"app.Engine",
			provider_fn(|_| Err(PhodamError::provider("engine exploded"))),
		))
		.unwrap();
	phodam
		.register_provider(ProviderRegistration::new(
			"app.Car",
			provider_fn(|context| {
				let engine = context.create("app.Engine")?;
				Ok(json!({ "engine": engine }))
			}),
		))
		.unwrap();

	// Act
	let error = phodam.create("app.Car").unwrap_err();

	// Assert
	match &error {
		PhodamError::CreationFailed { type_id, source, .. } => {
			assert_eq!(type_id, "app.Engine");
			assert!(!matches!(**source, PhodamError::CreationFailed { .. }));
		}
		other => panic!("expected CreationFailed, got {other:?}"),
	}
	assert!(matches!(
		error.root_cause(),
		PhodamError::Provider(message) if message == "engine exploded"
	));
}

#[rstest]
fn provider_error_carries_requested_key() {
	// Arrange
	let phodam = Phodam::new();
	phodam
		.register_provider(
			ProviderRegistration::new(
				"app.User",
				provider_fn(|_| Err(PhodamError::invalid_config("role", "unknown role"))),
			)
			.with_name("admin"),
		)
		.unwrap();

	// Act
	let error = phodam
		.create(CreateRequest::new("app.User").with_name("admin"))
		.unwrap_err();

	// Assert
	assert_eq!(
		error.to_string(),
		"Failed to create app.User (name: admin): Invalid config `role`: unknown role"
	);
}

#[rstest]
fn facade_is_shared_across_threads(users: (Phodam, Arc<AtomicUsize>)) {
	// Arrange
	let (phodam, calls) = users;

	// Act
	let values: Vec<Value> = std::thread::scope(|scope| {
		let handles: Vec<_> = (0..4)
			.map(|_| scope.spawn(|| phodam.create("app.User").unwrap()))
			.collect();
		handles.into_iter().map(|handle| handle.join().unwrap()).collect()
	});

	// Assert
	assert_eq!(values.len(), 4);
	assert_eq!(calls.load(Ordering::SeqCst), 4);
}
