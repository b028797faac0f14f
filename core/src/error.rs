use thiserror::Error;

/// Engine error taxonomy.
///
/// None of these are fatal: malformed events drop the announcement,
/// stale references synthesize a close, and config failures fall back to
/// defaults. Nothing crosses the host boundary as a panic.
#[derive(Debug, Error)]
pub enum HeraldError {
    /// An event of a known kind was missing a required field.
    #[error("malformed {kind} event: missing field '{field}'")]
    MalformedEvent { kind: String, field: &'static str },

    /// A tracked panel's underlying object was destroyed without a
    /// close notification.
    #[error("stale panel reference: {name}")]
    StaleReference { name: String },

    /// Configuration load/store failure.
    #[error("config error: {0}")]
    Config(#[from] confy::ConfyError),
}
