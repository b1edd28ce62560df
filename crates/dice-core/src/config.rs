/// Engine configuration constants.
///
/// The version string is fixed at compile time and exposed as an immutable
/// value so collaborators (entity layer, audit tooling) can stamp records
/// without reaching into mutable process state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig;

impl EngineConfig {
    /// Engine version reported alongside resolved records.
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// Sides of the standard die the combat sequence is played with.
    pub const COMBAT_DIE_SIDES: u32 = 6;
}
