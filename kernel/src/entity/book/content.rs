use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookContent(String);

impl BookContent {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }
}
