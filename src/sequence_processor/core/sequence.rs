/// A single record handed to processors by a reader.
///
/// `data` is stored exactly as read; processors normalise case themselves.
/// `quality` is only present for FASTQ input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    pub id: String,
    pub data: Vec<u8>,
    pub quality: Option<Vec<u8>>,
}

impl Sequence {
    pub fn new(id: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
            quality: None,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
