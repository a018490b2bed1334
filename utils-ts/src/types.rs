//! Classification of checker types by their flags.
//!
//! A checker exposes its types through [`TypeLike`]. Every guard here reads only the flags, so the answer for a type
//! is fixed once the checker has produced it; none of them resolve aliases or instantiate generics. For example, the
//! type of `T` in `type Test<T> = T` is a type parameter, while the type of `Values` after `enum Values {}` is an enum.

use crate::flags::ObjectFlags;
use crate::flags::TypeFlags;

/// A type produced by the checker.
pub trait TypeLike {
  fn flags(&self) -> TypeFlags;

  /// Only types with [`TypeFlags::OBJECT`] carry object flags.
  fn object_flags(&self) -> ObjectFlags {
    ObjectFlags::empty()
  }
}

impl<T: TypeLike + ?Sized> TypeLike for &T {
  fn flags(&self) -> TypeFlags {
    (**self).flags()
  }

  fn object_flags(&self) -> ObjectFlags {
    (**self).object_flags()
  }
}

pub fn is_type_flag_set<T: TypeLike + ?Sized>(ty: &T, flag: TypeFlags) -> bool {
  ty.flags().intersects(flag)
}

pub fn is_object_flag_set<T: TypeLike + ?Sized>(ty: &T, flag: ObjectFlags) -> bool {
  ty.object_flags().intersects(flag)
}

pub fn is_conditional_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_type_flag_set(ty, TypeFlags::CONDITIONAL)
}

pub fn is_enum_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_type_flag_set(ty, TypeFlags::ENUM)
}

pub fn is_index_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_type_flag_set(ty, TypeFlags::INDEX)
}

pub fn is_indexed_access_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_type_flag_set(ty, TypeFlags::INDEXED_ACCESS)
}

pub fn is_intersection_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_type_flag_set(ty, TypeFlags::INTERSECTION)
}

pub fn is_object_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_type_flag_set(ty, TypeFlags::OBJECT)
}

pub fn is_substitution_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_type_flag_set(ty, TypeFlags::SUBSTITUTION)
}

pub fn is_template_literal_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_type_flag_set(ty, TypeFlags::TEMPLATE_LITERAL)
}

pub fn is_type_parameter<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_type_flag_set(ty, TypeFlags::TYPE_PARAMETER)
}

/// Either half of [`TypeFlags::UNION_OR_INTERSECTION`] suffices.
pub fn is_union_or_intersection_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_type_flag_set(ty, TypeFlags::UNION_OR_INTERSECTION)
}

pub fn is_union_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_type_flag_set(ty, TypeFlags::UNION)
}

pub fn is_unique_es_symbol_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_type_flag_set(ty, TypeFlags::UNIQUE_ES_SYMBOL)
}

/// An instantiation of a generic type such as `Array<string>`.
pub fn is_type_reference<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_object_type(ty) && is_object_flag_set(ty, ObjectFlags::REFERENCE)
}

pub fn is_tuple_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_object_type(ty) && is_object_flag_set(ty, ObjectFlags::TUPLE)
}

pub fn is_class_or_interface_type<T: TypeLike + ?Sized>(ty: &T) -> bool {
  is_object_type(ty) && is_object_flag_set(ty, ObjectFlags::CLASS_OR_INTERFACE)
}
