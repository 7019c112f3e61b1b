//! Dropdown filter component.
//!
//! Filters submit as plain `GET` query parameters; an empty value means
//! "no filter".

/// Option for a select filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Option value submitted in the query string.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Whether this option reflects the current request.
    pub selected: bool,
}

impl FilterOption {
    /// Create a new, unselected option.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            selected: false,
        }
    }
}

/// A single-select dropdown bound to a query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectFilter {
    /// Query parameter key.
    pub key: String,
    /// Accessible label.
    pub label: String,
    /// Options in display order; the first is the "all" option.
    pub options: Vec<FilterOption>,
}

impl SelectFilter {
    /// Create a filter whose first option (value `""`) clears it.
    #[must_use]
    pub fn new(key: &str, label: &str, all_label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options: vec![FilterOption::new("", all_label)],
        }
    }

    /// Append an option.
    #[must_use]
    pub fn option(mut self, value: &str, label: &str) -> Self {
        self.options.push(FilterOption::new(value, label));
        self
    }

    /// Append one option per value, labelled with the value itself.
    #[must_use]
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.extend(
            values
                .into_iter()
                .map(|v| FilterOption::new(v.as_ref(), v.as_ref())),
        );
        self
    }

    /// Mark the option matching the current value as selected.
    ///
    /// A non-empty value with no matching option is appended, so the
    /// dropdown always shows the filter that produced the rows.
    #[must_use]
    pub fn select(mut self, current: Option<&str>) -> Self {
        let current = current.unwrap_or_default();
        if !self.options.iter().any(|o| o.value == current) {
            self.options.push(FilterOption::new(current, current));
        }
        for option in &mut self.options {
            option.selected = option.value == current;
        }
        self
    }
}

/// Distinct non-empty values in order of first appearance.
pub fn distinct_values<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen: Vec<String> = Vec::new();
    for value in values.into_iter().flatten() {
        if !value.is_empty() && !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
