/// Query parameters for listing users.
///
/// Kept as raw strings: unparseable numbers are not rejected, they fall
/// through to the pagination defaults.
#[derive(Debug, Default)]
pub struct ListUsersQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

impl ListUsersQuery {
    /// Build from decoded `key=value` pairs. When a key repeats, the first
    /// occurrence wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                "search" => &mut query.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn page(&self) -> Option<i64> {
        parse_lenient(self.page.as_deref())
    }

    pub fn limit(&self) -> Option<i64> {
        parse_lenient(self.limit.as_deref())
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }
}

/// Absent stays absent; present but unparseable becomes 0, which
/// normalization then replaces with the default.
fn parse_lenient(value: Option<&str>) -> Option<i64> {
    value.map(|v| v.trim().parse().unwrap_or(0))
}
