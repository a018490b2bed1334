use utils_ts::declaration_has_modifier;
use utils_ts::has_modifier;
use utils_ts::HasModifiers;
use utils_ts::Modifier;
use utils_ts::ModifierFlags;
use utils_ts::ModifierKind;
use utils_ts::ModifierKind::*;

// Shaped like a parser's modifier token: a kind plus a source position.
struct ModifierToken {
  kind: ModifierKind,
  #[allow(dead_code)]
  start: u32,
}

impl Modifier for ModifierToken {
  fn kind(&self) -> ModifierKind {
    self.kind
  }
}

struct PropertyDecl {
  modifiers: Option<Vec<ModifierToken>>,
}

impl HasModifiers for PropertyDecl {
  type Modifier = ModifierToken;

  fn modifiers(&self) -> Option<&[ModifierToken]> {
    self.modifiers.as_deref()
  }
}

fn tokens(kinds: &[ModifierKind]) -> Vec<ModifierToken> {
  kinds
    .iter()
    .enumerate()
    .map(|(i, &kind)| ModifierToken {
      kind,
      start: i as u32 * 8,
    })
    .collect()
}

#[test]
fn absent_modifiers_never_match() {
  assert!(!has_modifier(None::<&[ModifierKind]>, &[Public]));
  assert!(!has_modifier(None::<&[ModifierKind]>, &[]));
  assert!(!has_modifier(None::<Vec<ModifierToken>>, &ModifierKind::ALL));
}

#[test]
fn empty_modifiers_never_match() {
  assert!(!has_modifier(Some(&[] as &[ModifierKind]), &[Public]));
  assert!(!has_modifier(Some(Vec::<ModifierToken>::new()), &ModifierKind::ALL));
}

#[test]
fn matching_kind_is_found() {
  assert!(has_modifier(Some(&[Public, Static]), &[Static]));
  assert!(has_modifier(Some(&[Public, Static]), &[Abstract, Public]));
}

#[test]
fn non_matching_kinds_are_rejected() {
  assert!(!has_modifier(Some(&[Public]), &[Static, Abstract]));
  assert!(!has_modifier(Some(&[Public, Static]), &[]));
}

#[test]
fn duplicates_are_tolerated() {
  assert!(has_modifier(Some(&[Readonly, Readonly]), &[Readonly]));
  assert!(has_modifier(Some(&[Readonly]), &[Readonly, Readonly]));
  assert!(!has_modifier(Some(&[Readonly, Readonly]), &[Static, Static]));
}

#[test]
fn query_is_repeatable() {
  let modifiers = tokens(&[Export, Declare]);
  let first = has_modifier(Some(&modifiers), &[Declare]);
  let second = has_modifier(Some(&modifiers), &[Declare]);
  assert!(first);
  assert_eq!(first, second);
  assert_eq!(modifiers.len(), 2);
}

#[test]
fn declaration_queries() {
  // `private readonly x: number;`
  let field = PropertyDecl {
    modifiers: Some(tokens(&[Private, Readonly])),
  };
  assert!(declaration_has_modifier(&field, &[Readonly]));
  assert!(!declaration_has_modifier(&field, &[Static]));
  assert_eq!(
    utils_ts::modifier_flags(&field),
    ModifierFlags::PRIVATE | ModifierFlags::READONLY
  );
  assert!(utils_ts::is_modifier_flag_set(&field, ModifierFlags::PARAMETER_PROPERTY_MODIFIER));

  let bare = PropertyDecl { modifiers: None };
  assert!(!declaration_has_modifier(&bare, &ModifierKind::ALL));
  assert!(!utils_ts::is_modifier_flag_set(&bare, ModifierFlags::all()));

  let empty = PropertyDecl {
    modifiers: Some(Vec::new()),
  };
  assert_eq!(utils_ts::modifier_flags(&empty), utils_ts::modifier_flags(&bare));
}
