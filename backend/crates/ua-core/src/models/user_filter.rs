use crate::User;

/// Case folding used for search on both sides of the comparison.
/// Full Unicode lowercase, so "É" matches "é" and "Б" matches "б".
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Row filter shared by the count and fetch phases of a listing.
///
/// An empty search term matches every non-deleted user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    search: Option<String>,
}

impl UserFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_search(search: &str) -> Self {
        if search.is_empty() {
            Self::all()
        } else {
            Self {
                search: Some(search.to_string()),
            }
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Case-insensitive substring match on name or email.
    /// Stores that cannot push the filter down can use this directly.
    pub fn matches(&self, user: &User) -> bool {
        if user.is_deleted() {
            return false;
        }

        match &self.search {
            None => true,
            Some(term) => {
                let term = fold_case(term);
                fold_case(&user.name).contains(&term) || fold_case(&user.email).contains(&term)
            }
        }
    }
}
