/// Summary of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Generation index (0 is the initial population).
    pub generation: usize,

    /// Best objective within this generation, if any individual is valid.
    pub best: Option<f64>,

    /// Mean objective over the valid individuals of this generation.
    pub mean: Option<f64>,

    /// Number of invalid individuals in this generation.
    pub invalid: usize,

    /// Best objective seen in this or any earlier generation.
    pub best_ever: Option<f64>,
}
