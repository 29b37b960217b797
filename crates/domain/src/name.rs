use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

/// Free-form plan description. May be empty, unlike [`Name`].
#[derive(Debug, Default, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Description(String);

impl Description {
    pub fn new(description: &str) -> Result<Self, DescriptionError> {
        let trimmed = description.trim();
        let len = trimmed.len();

        if len > 500 {
            return Err(DescriptionError::TooLong(len));
        }

        Ok(Description(trimmed.to_string()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DescriptionError {
    #[error("Description must be 500 characters or fewer ({0} > 500)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Push Pull Legs", Ok(Name("Push Pull Legs".to_string())))]
    #[case("  Upper Lower  ", Ok(Name("Upper Lower".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case("   ", Err(NameError::Empty))]
    #[case(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        Err(NameError::TooLong(65))
    )]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[rstest]
    #[case("", Ok(Description(String::new())))]
    #[case("Week 1 of the hypertrophy block", Ok(Description("Week 1 of the hypertrophy block".to_string())))]
    fn test_description_new(
        #[case] description: &str,
        #[case] expected: Result<Description, DescriptionError>,
    ) {
        assert_eq!(Description::new(description), expected);
    }

    #[test]
    fn test_description_too_long() {
        assert_eq!(
            Description::new(&"a".repeat(501)),
            Err(DescriptionError::TooLong(501))
        );
    }

    #[test]
    fn test_description_is_empty() {
        assert!(Description::default().is_empty());
        assert!(!Description::new("a").unwrap().is_empty());
    }
}
