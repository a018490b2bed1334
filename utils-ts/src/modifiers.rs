use crate::error::UnknownModifierError;
use crate::flags::ModifierFlags;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

/// A modifier keyword that can precede a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ModifierKind {
  Abstract,
  Accessor,
  Async,
  Const,
  Declare,
  Default,
  Export,
  In,
  Out,
  Override,
  Private,
  Protected,
  Public,
  Readonly,
  Static,
}

static KEYWORDS: Lazy<AHashMap<&'static str, ModifierKind>> = Lazy::new(|| {
  ModifierKind::ALL
    .iter()
    .map(|&kind| (kind.keyword(), kind))
    .collect()
});

impl ModifierKind {
  pub const ALL: [ModifierKind; 15] = [
    ModifierKind::Abstract,
    ModifierKind::Accessor,
    ModifierKind::Async,
    ModifierKind::Const,
    ModifierKind::Declare,
    ModifierKind::Default,
    ModifierKind::Export,
    ModifierKind::In,
    ModifierKind::Out,
    ModifierKind::Override,
    ModifierKind::Private,
    ModifierKind::Protected,
    ModifierKind::Public,
    ModifierKind::Readonly,
    ModifierKind::Static,
  ];

  pub fn keyword(self) -> &'static str {
    match self {
      ModifierKind::Abstract => "abstract",
      ModifierKind::Accessor => "accessor",
      ModifierKind::Async => "async",
      ModifierKind::Const => "const",
      ModifierKind::Declare => "declare",
      ModifierKind::Default => "default",
      ModifierKind::Export => "export",
      ModifierKind::In => "in",
      ModifierKind::Out => "out",
      ModifierKind::Override => "override",
      ModifierKind::Private => "private",
      ModifierKind::Protected => "protected",
      ModifierKind::Public => "public",
      ModifierKind::Readonly => "readonly",
      ModifierKind::Static => "static",
    }
  }

  /// Looks up the kind spelled by `keyword`. Matching is case sensitive, as in source code.
  pub fn from_keyword(keyword: &str) -> Option<ModifierKind> {
    KEYWORDS.get(keyword).copied()
  }

  /// The single [`ModifierFlags`] bit this keyword sets. `declare` sets [`ModifierFlags::AMBIENT`].
  pub fn flag(self) -> ModifierFlags {
    match self {
      ModifierKind::Abstract => ModifierFlags::ABSTRACT,
      ModifierKind::Accessor => ModifierFlags::ACCESSOR,
      ModifierKind::Async => ModifierFlags::ASYNC,
      ModifierKind::Const => ModifierFlags::CONST,
      ModifierKind::Declare => ModifierFlags::AMBIENT,
      ModifierKind::Default => ModifierFlags::DEFAULT,
      ModifierKind::Export => ModifierFlags::EXPORT,
      ModifierKind::In => ModifierFlags::IN,
      ModifierKind::Out => ModifierFlags::OUT,
      ModifierKind::Override => ModifierFlags::OVERRIDE,
      ModifierKind::Private => ModifierFlags::PRIVATE,
      ModifierKind::Protected => ModifierFlags::PROTECTED,
      ModifierKind::Public => ModifierFlags::PUBLIC,
      ModifierKind::Readonly => ModifierFlags::READONLY,
      ModifierKind::Static => ModifierFlags::STATIC,
    }
  }

  /// `public`, `private` or `protected`.
  pub fn is_accessibility(self) -> bool {
    self.flag().intersects(ModifierFlags::ACCESSIBILITY_MODIFIER)
  }

  /// Whether this keyword on a constructor parameter turns the parameter into a property.
  pub fn is_parameter_property(self) -> bool {
    self.flag().intersects(ModifierFlags::PARAMETER_PROPERTY_MODIFIER)
  }

  pub fn is_typescript_only(self) -> bool {
    self.flag().intersects(ModifierFlags::TYPESCRIPT_MODIFIER)
  }
}

impl Display for ModifierKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.keyword())
  }
}

impl FromStr for ModifierKind {
  type Err = UnknownModifierError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ModifierKind::from_keyword(s).ok_or_else(|| {
      tracing::trace!(keyword = s, "rejected modifier keyword");
      UnknownModifierError {
        keyword: s.to_string(),
      }
    })
  }
}

/// A modifier as attached to a declaration node.
///
/// Compiler nodes implement this to expose their keyword kind; the kind itself also implements it so plain lists of
/// kinds can be queried directly.
pub trait Modifier {
  fn kind(&self) -> ModifierKind;
}

impl Modifier for ModifierKind {
  fn kind(&self) -> ModifierKind {
    *self
  }
}

impl<M: Modifier + ?Sized> Modifier for &M {
  fn kind(&self) -> ModifierKind {
    (**self).kind()
  }
}

/// Whether `modifiers` contains a modifier of any of the given `kinds`.
///
/// `None` means the declaration has no modifier list and behaves like an empty one. An empty `kinds` never matches.
pub fn has_modifier<I>(modifiers: Option<I>, kinds: &[ModifierKind]) -> bool
where
  I: IntoIterator,
  I::Item: Modifier,
{
  let Some(modifiers) = modifiers else {
    return false;
  };
  modifiers
    .into_iter()
    .any(|modifier| kinds.contains(&modifier.kind()))
}

/// A declaration node that may carry a modifier list.
pub trait HasModifiers {
  type Modifier: Modifier;

  /// `None` if the node has no modifier list at all.
  fn modifiers(&self) -> Option<&[Self::Modifier]>;
}

pub fn declaration_has_modifier<N: HasModifiers + ?Sized>(node: &N, kinds: &[ModifierKind]) -> bool {
  has_modifier(node.modifiers(), kinds)
}

pub fn modifier_flags<N: HasModifiers + ?Sized>(node: &N) -> ModifierFlags {
  ModifierFlags::from_modifiers(node.modifiers())
}

/// Whether any bit of `flag` is set among the node's modifiers.
pub fn is_modifier_flag_set<N: HasModifiers + ?Sized>(node: &N, flag: ModifierFlags) -> bool {
  modifier_flags(node).intersects(flag)
}

impl ModifierFlags {
  /// Combines the flags of every modifier. Absent and empty lists both give the empty set.
  pub fn from_modifiers<I>(modifiers: Option<I>) -> ModifierFlags
  where
    I: IntoIterator,
    I::Item: Modifier,
  {
    modifiers
      .into_iter()
      .flatten()
      .fold(ModifierFlags::empty(), |flags, modifier| {
        flags | modifier.kind().flag()
      })
  }

  pub fn from_kinds(kinds: &[ModifierKind]) -> ModifierFlags {
    ModifierFlags::from_modifiers(Some(kinds))
  }

  /// The kinds whose flag bit is set, in [`ModifierKind::ALL`] order.
  pub fn kinds(self) -> impl Iterator<Item = ModifierKind> {
    ModifierKind::ALL
      .into_iter()
      .filter(move |kind| self.contains(kind.flag()))
  }
}
