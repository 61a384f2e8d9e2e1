/// Files picked by the user, worked through one at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadQueue<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Default for UploadQueue<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: 0,
        }
    }
}

impl<T> UploadQueue<T> {
    /// Replace the queue contents and point at the first item.
    pub fn set(&mut self, items: Vec<T>) {
        self.items = items;
        self.index = 0;
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Step to the next item, wrapping at the end. An empty queue stays put.
    pub fn advance(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.items.len();
        self.items.get(self.index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index = 0;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
