/// The three cases every text helper distinguishes before doing any work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape<'a> {
    Absent,
    Empty(&'a str),
    Present(&'a str),
}

impl<'a> Shape<'a> {
    pub(crate) fn of(value: Option<&'a str>) -> Self {
        match value {
            None => Self::Absent,
            Some(s) if s.is_empty() => Self::Empty(s),
            Some(s) => Self::Present(s),
        }
    }
}
