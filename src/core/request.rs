use crate::core::niche::Niche;

/// Everything the operator supplies for one generation pass. Built fresh per
/// submit, handed to the prompt builder by reference, and dropped when the
/// request completes.
#[derive(Debug, Clone)]
pub struct ScriptRequest {
    pub product: String,
    pub presenter: String,
    pub audience: String,
    pub pain_point: String,
    pub benefits: String,
    pub pricing: String,
    pub guarantee: String,
    pub call_to_action: String,
    pub niche: Option<Niche>,
}

impl ScriptRequest {
    /// Example sentence for the selected niche, empty when no niche is set.
    pub fn niche_example(&self) -> &'static str {
        self.niche.map(|n| n.example()).unwrap_or("")
    }
}
