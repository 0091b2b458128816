//! Synthesizing provider built from a [`TypeDefinition`].

use std::sync::Arc;

use phodam_core::{
	CreateRequest, FieldDefinition, PhodamResult, Provider, ProviderContext, TypeDefinition, Value,
};
use rand::Rng;

/// Provider that assembles a JSON object field by field.
///
/// Each field takes the caller's override when one exists; otherwise it is
/// created through the context's factory with the field's own type, name,
/// overrides and config. Array fields produce a JSON array whose length is
/// drawn from `array_len`. Nullable fields become `null` when their type has
/// no provider.
#[derive(Debug, Clone)]
pub struct DefinitionProvider {
	definition: Arc<TypeDefinition>,
	array_len: (usize, usize),
}

impl DefinitionProvider {
	/// Creates a provider for `definition`.
	///
	/// `array_len` is the inclusive `(min, max)` length of array fields.
	pub fn new(definition: Arc<TypeDefinition>, array_len: (usize, usize)) -> Self {
		Self {
			definition,
			array_len,
		}
	}

	pub fn definition(&self) -> &TypeDefinition {
		&self.definition
	}

	fn create_field(
		&self,
		field_name: &str,
		field: &FieldDefinition,
		context: &ProviderContext<'_>,
	) -> PhodamResult<Value> {
		let request = CreateRequest::new(field.type_id())
			.with_optional_name(field.name())
			.with_overrides(field.overrides().clone())
			.with_config(field.config().clone());

		let result = if field.is_array() {
			let len = self.array_field_len();
			(0..len)
				.map(|_| context.create(request.clone()))
				.collect::<PhodamResult<Vec<_>>>()
				.map(Value::Array)
		} else {
			context.create(request)
		};

		match result {
			Err(error)
				if field.is_nullable()
					&& error.is_provider_not_found_for(field.type_id(), field.name()) =>
			{
				tracing::debug!(
					type_id = %self.definition.type_id(),
					field = %field_name,
					field_type = %field.type_id(),
					"No provider for nullable field, using null"
				);
				Ok(Value::Null)
			}
			other => other,
		}
	}

	fn array_field_len(&self) -> usize {
		let (min, max) = self.array_len;
		if min >= max {
			return min;
		}
		rand::thread_rng().gen_range(min..=max)
	}
}

impl Provider for DefinitionProvider {
	fn create(&self, context: &ProviderContext<'_>) -> PhodamResult<Value> {
		let mut object = serde_json::Map::with_capacity(self.definition.fields().len());

		for (field_name, field) in self.definition.fields() {
			let value = if context.has_override(field_name) {
				context.get_override(field_name)?.clone()
			} else {
				self.create_field(field_name, field, context)?
			};
			object.insert(field_name.clone(), value);
		}

		for unknown in context
			.overrides()
			.keys()
			.filter(|key| !self.definition.has_field(key))
		{
			tracing::trace!(
				type_id = %self.definition.type_id(),
				field = %unknown,
				"Ignoring override for undeclared field"
			);
		}

		Ok(Value::Object(object))
	}
}
