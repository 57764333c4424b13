//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values.
///
/// A value object has no identity: two instances with the same attribute
/// values are the same value (`Price`, an inventory line). Entities, by
/// contrast, are the same only when their IDs match. Value objects never
/// mutate — "changing" one means constructing a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
