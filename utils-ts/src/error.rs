/// Text that does not spell any modifier keyword.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown modifier keyword: {keyword}")]
pub struct UnknownModifierError {
  pub keyword: String,
}
