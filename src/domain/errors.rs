#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    UnknownQuestion(u16),
    InvalidOption { question_id: u16, letter: char },
    IncompleteResponses { answered: usize },
    MissingProfileField(&'static str),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::UnknownQuestion(id) => {
                write!(f, "No question with id {} in the catalog", id)
            }
            DomainError::InvalidOption { question_id, letter } => {
                write!(f, "Question {} has no option '{}'", question_id, letter)
            }
            DomainError::IncompleteResponses { answered } => {
                write!(f, "Only {} of 10 questions answered", answered)
            }
            DomainError::MissingProfileField(field) => {
                write!(f, "Required field missing: {}", field)
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
