/// Tuning constants for the board. There is no user-facing settings surface;
/// `App` provides the defaults through context.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// localStorage key holding the serialized task array.
    pub storage_key: String,
    /// Vertical bias added below an indicator's top edge when picking the
    /// nearest drop indicator.
    pub drop_band: f64,
    /// Delay before the board replaces the loading placeholder.
    pub loading_delay_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: "kanban".to_string(),
            drop_band: 50.0,
            loading_delay_ms: 350,
        }
    }
}
