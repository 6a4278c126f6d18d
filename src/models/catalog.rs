use super::{error::AppError, yacht::Yacht};

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

/// The yachts on offer. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    yachts: Vec<Yacht>,
}

impl Catalog {
    pub fn new(yachts: Vec<Yacht>) -> Self {
        Self { yachts }
    }

    /// Parses a catalog from its JSON form (an array of yachts).
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|e| AppError::DataError(format!("Invalid yacht catalog: {e}")))
    }

    /// Loads the catalog bundled with the application.
    pub fn load() -> Result<Self, AppError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Bundled catalog, or an empty one if it fails to parse
    pub fn builtin() -> Self {
        Self::load().unwrap_or_else(|e| {
            gloo::console::error!(e.to_string());
            Self::new(Vec::new())
        })
    }

    pub fn yachts(&self) -> &[Yacht] {
        &self.yachts
    }

    pub fn find(&self, id: &str) -> Option<&Yacht> {
        self.yachts.iter().find(|y| y.id == id)
    }
}
