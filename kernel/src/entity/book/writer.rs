use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookWriter(String);

impl BookWriter {
    pub fn new(writer: impl Into<String>) -> Self {
        Self(writer.into())
    }
}
