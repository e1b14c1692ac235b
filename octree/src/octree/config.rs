#[derive(Debug, Clone)]
pub struct Config {
    /// Level of the octants whose children are leaves. The root sits at level 0.
    pub total_levels: u8,
    /// Levels built eagerly at construction. Octants at or above this level
    /// are immutable and carry no lock.
    pub pregen_levels: u8,
    /// Worker threads dedicated to find queries, 0 lets rayon pick.
    pub find_threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            total_levels: 6,
            pregen_levels: 2,
            find_threads: 0,
        }
    }
}
