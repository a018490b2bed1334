//! Bit sets mirroring the checker's tagging of modifiers, types and object types.
//!
//! Bit values match the TypeScript compiler's public `ModifierFlags`, `TypeFlags`
//! and `ObjectFlags` enums, so raw values read out of a checker can be wrapped
//! with `from_bits_retain` without translation.

use bitflags::bitflags;

bitflags! {
  /// Modifiers combined over a declaration.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
  pub struct ModifierFlags: u32 {
    const PUBLIC = 1 << 0;
    const PRIVATE = 1 << 1;
    const PROTECTED = 1 << 2;
    const READONLY = 1 << 3;
    const OVERRIDE = 1 << 4;
    const EXPORT = 1 << 5;
    const ABSTRACT = 1 << 6;
    /// `declare`.
    const AMBIENT = 1 << 7;
    const STATIC = 1 << 8;
    const ACCESSOR = 1 << 9;
    const ASYNC = 1 << 10;
    const DEFAULT = 1 << 11;
    const CONST = 1 << 12;
    const IN = 1 << 13;
    const OUT = 1 << 14;
    const DECORATOR = 1 << 15;
    /// JSDoc `@deprecated`; never produced by a modifier keyword.
    const DEPRECATED = 1 << 16;

    const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
    // Accessibility modifiers and 'readonly' can be attached to a parameter in a constructor to make it a property.
    const PARAMETER_PROPERTY_MODIFIER = Self::ACCESSIBILITY_MODIFIER.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();
    const NON_PUBLIC_ACCESSIBILITY_MODIFIER = Self::PRIVATE.bits() | Self::PROTECTED.bits();
    const TYPESCRIPT_MODIFIER = Self::AMBIENT.bits()
      | Self::PUBLIC.bits()
      | Self::PRIVATE.bits()
      | Self::PROTECTED.bits()
      | Self::READONLY.bits()
      | Self::ABSTRACT.bits()
      | Self::CONST.bits()
      | Self::OVERRIDE.bits()
      | Self::IN.bits()
      | Self::OUT.bits();
  }
}

bitflags! {
  /// Classification of a checker type.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
  pub struct TypeFlags: u32 {
    const ANY = 1 << 0;
    const UNKNOWN = 1 << 1;
    const STRING = 1 << 2;
    const NUMBER = 1 << 3;
    const BOOLEAN = 1 << 4;
    const ENUM = 1 << 5;
    const BIG_INT = 1 << 6;
    const STRING_LITERAL = 1 << 7;
    const NUMBER_LITERAL = 1 << 8;
    const BOOLEAN_LITERAL = 1 << 9;
    const ENUM_LITERAL = 1 << 10;
    const BIG_INT_LITERAL = 1 << 11;
    const ES_SYMBOL = 1 << 12;
    /// `unique symbol`.
    const UNIQUE_ES_SYMBOL = 1 << 13;
    const VOID = 1 << 14;
    const UNDEFINED = 1 << 15;
    const NULL = 1 << 16;
    const NEVER = 1 << 17;
    const TYPE_PARAMETER = 1 << 18;
    const OBJECT = 1 << 19;
    const UNION = 1 << 20;
    const INTERSECTION = 1 << 21;
    /// `keyof T`.
    const INDEX = 1 << 22;
    /// `T[K]`.
    const INDEXED_ACCESS = 1 << 23;
    const CONDITIONAL = 1 << 24;
    const SUBSTITUTION = 1 << 25;
    /// `object`.
    const NON_PRIMITIVE = 1 << 26;
    const TEMPLATE_LITERAL = 1 << 27;
    const STRING_MAPPING = 1 << 28;

    const LITERAL = Self::STRING_LITERAL.bits()
      | Self::NUMBER_LITERAL.bits()
      | Self::BIG_INT_LITERAL.bits()
      | Self::BOOLEAN_LITERAL.bits();
    const UNIT = Self::ENUM.bits()
      | Self::LITERAL.bits()
      | Self::UNIQUE_ES_SYMBOL.bits()
      | Self::UNDEFINED.bits()
      | Self::NULL.bits();
    const UNION_OR_INTERSECTION = Self::UNION.bits() | Self::INTERSECTION.bits();
    const STRUCTURED_TYPE = Self::OBJECT.bits() | Self::UNION.bits() | Self::INTERSECTION.bits();
  }
}

bitflags! {
  /// Further classification of types carrying [`TypeFlags::OBJECT`].
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
  pub struct ObjectFlags: u32 {
    const CLASS = 1 << 0;
    const INTERFACE = 1 << 1;
    /// Generic type reference, e.g. `Array<T>`.
    const REFERENCE = 1 << 2;
    const TUPLE = 1 << 3;
    const ANONYMOUS = 1 << 4;
    const MAPPED = 1 << 5;
    const INSTANTIATED = 1 << 6;
    const OBJECT_LITERAL = 1 << 7;
    const EVOLVING_ARRAY = 1 << 8;
    const OBJECT_LITERAL_PATTERN_WITH_COMPUTED_PROPERTIES = 1 << 9;
    const REVERSE_MAPPED = 1 << 10;
    const JSX_ATTRIBUTES = 1 << 11;
    const JS_LITERAL = 1 << 12;
    const FRESH_LITERAL = 1 << 13;
    const ARRAY_LITERAL = 1 << 14;

    const CLASS_OR_INTERFACE = Self::CLASS.bits() | Self::INTERFACE.bits();
  }
}

/// Whether any bit of `test` is present in `all`.
///
/// Composite flags such as [`TypeFlags::UNION_OR_INTERSECTION`] therefore match
/// when either half is set; use `contains` when every bit must be present.
pub fn is_flag_set<F: bitflags::Flags + Copy>(all: F, test: F) -> bool {
  all.intersects(test)
}
