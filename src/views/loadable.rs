/// State of something fetched asynchronously.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loadable<T, E> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(E),
}

impl<T, E> Loadable<T, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Loadable::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Moves into `Loading`, returning whatever was held before.
    pub fn start(&mut self) -> Self {
        std::mem::replace(self, Loadable::Loading)
    }

    pub fn finish(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(v) => Loadable::Loaded(v),
            Err(e) => Loadable::Failed(e),
        };
    }
}
