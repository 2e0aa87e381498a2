/// Limits on generator input
///
/// Generated exponents are zero/successor chains, so a large allowed root
/// nests `Succ` that many times and a consumer's compiler eventually hits its
/// recursion limit. The defaults stay well inside what rustc accepts.
#[derive(Debug, Clone)]
pub struct GeneratorLimits {
    /// Maximum size of a `.units` file in bytes
    pub max_definition_bytes: usize,

    /// Maximum number of base units in one system
    /// Real usage: 7 (SI), Limit: 32
    pub max_base_units: usize,

    /// Maximum allowed root
    /// Real usage: 1-2, Limit: 32
    pub max_allowed_root: u32,
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            max_definition_bytes: 1024 * 1024, // 1 MB
            max_base_units: 32,
            max_allowed_root: 32,
        }
    }
}

impl GeneratorLimits {
    pub fn new() -> Self {
        Self::default()
    }
}
