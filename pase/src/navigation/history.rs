/// In-app browsing history with back/forward navigation.
#[derive(Debug, Clone)]
pub(crate) struct Navigator {
    entries: Vec<String>,
    index: usize,
}

impl Navigator {
    pub(crate) fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    pub(crate) fn current_path(&self) -> &str {
        self.entries
            .get(self.index)
            .map(String::as_str)
            .unwrap_or("/")
    }

    /// Push `path`, dropping any forward entries. Returns `false` when the
    /// path is already current.
    pub(crate) fn push(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if path == self.current_path() {
            return false;
        }

        self.entries.truncate(self.index + 1);
        self.entries.push(path);
        self.index = self.entries.len() - 1;
        true
    }

    /// Replace the current entry with `path`.
    pub(crate) fn replace(&mut self, path: impl Into<String>) {
        let path = path.into();
        match self.entries.get_mut(self.index) {
            Some(entry) => *entry = path,
            None => {
                self.entries.push(path);
                self.index = self.entries.len() - 1;
            },
        }
    }

    pub(crate) fn back(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current_path())
    }

    pub(crate) fn forward(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current_path())
    }
}
