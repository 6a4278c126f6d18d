/// Pages of the site, addressed through the location hash (`#/yacht/<id>`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Yacht(String),
    NotFound,
}

impl Route {
    /// Parses a location hash. The leading `#` is optional.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            // "yat" is the Turkish path still linked from older pages
            ["yacht" | "yat", id] => Self::Yacht((*id).to_string()),
            _ => Self::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Yacht(id) => format!("#/yacht/{id}"),
            Self::NotFound => "#/not-found".to_string(),
        }
    }

    /// Anything but the landing page
    pub fn is_inner(&self) -> bool {
        !matches!(self, Self::Home)
    }
}

/// Whether the session history holds a page to go back to.
/// A freshly opened tab has exactly one entry.
pub fn has_previous_page(history_length: u32) -> bool {
    history_length > 1
}

/// Steps back in the session history, or to the landing page when the
/// site was entered directly on this page.
pub fn go_back() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let history = window.history().ok();
    let length = history.as_ref().and_then(|h| h.length().ok()).unwrap_or(0);

    match history {
        Some(history) if has_previous_page(length) => {
            if let Err(e) = history.back() {
                gloo::console::warn!(format!("Failed to go back: {e:?}"));
            }
        }
        _ => {
            if let Err(e) = window.location().set_hash(&Route::Home.href()) {
                gloo::console::warn!(format!("Failed to open home page: {e:?}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_variants() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
    }

    #[test]
    fn test_yacht_paths() {
        let expected = Route::Yacht("sea-breeze".to_string());
        assert_eq!(Route::from_hash("#/yacht/sea-breeze"), expected);
        assert_eq!(Route::from_hash("#/yat/sea-breeze/"), expected);
        assert_eq!(Route::from_hash(&expected.href()), expected);
    }

    #[test]
    fn test_back_needs_an_earlier_entry() {
        assert!(!has_previous_page(0));
        assert!(!has_previous_page(1));
        assert!(has_previous_page(2));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::from_hash("#/transfers"), Route::NotFound);
        assert!(Route::NotFound.is_inner());
        assert!(!Route::Home.is_inner());
    }
}
