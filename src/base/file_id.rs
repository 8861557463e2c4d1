use std::fmt;

/// Handle for one loaded document.
///
/// Ids are handed out in registration order by
/// [`FileSet`](crate::project::FileSet), which maps them back to paths.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FileId(u32);

impl FileId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Shown for files whose path is unknown.
impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}
