//! Predicates over the TypeScript checker's tagging scheme.
//!
//! The checker tags declarations with modifier keywords and tags types with bit flags. Testing those tags directly is
//! verbose and easy to get subtly wrong (e.g. treating an absent modifier list differently from an empty one, or
//! testing a composite flag with `contains` where any bit should do). This crate wraps those checks in small pure
//! functions:
//! - [`has_modifier`] and the [`HasModifiers`] helpers for declaration modifiers,
//! - the [`flags`] bit sets, mirroring the checker's bit values,
//! - the guards in [`types`] for classifying a checker type.
//!
//! Nothing here parses or checks code. Compiler nodes and types are reached only through the [`Modifier`],
//! [`HasModifiers`] and [`TypeLike`] traits.

pub mod error;
pub mod flags;
pub mod modifiers;
pub mod types;

pub use error::UnknownModifierError;
pub use flags::ModifierFlags;
pub use flags::ObjectFlags;
pub use flags::TypeFlags;
pub use modifiers::declaration_has_modifier;
pub use modifiers::has_modifier;
pub use modifiers::is_modifier_flag_set;
pub use modifiers::modifier_flags;
pub use modifiers::HasModifiers;
pub use modifiers::Modifier;
pub use modifiers::ModifierKind;
pub use types::TypeLike;
