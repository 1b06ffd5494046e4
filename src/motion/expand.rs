//! At-most-one-open lists (job cards, FAQ entries).

#[derive(Debug, Clone, Default)]
pub struct Accordion {
    len: usize,
    expanded: Option<usize>,
}

impl Accordion {
    /// All items start collapsed.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            expanded: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Toggle `index` if it is open, otherwise open it and close the rest.
    /// Out-of-range indices leave the state unchanged.
    pub fn select(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_open_item_collapses_it() {
        let mut a = Accordion::new(3);
        a.select(1);
        assert_eq!(a.expanded(), Some(1));
        a.select(1);
        assert_eq!(a.expanded(), None);
    }

    #[test]
    fn selecting_other_item_switches() {
        let mut a = Accordion::new(3);
        a.select(0);
        a.select(2);
        assert_eq!(a.expanded(), Some(2));
        assert!(!a.is_expanded(0));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut a = Accordion::new(3);
        a.select(1);
        a.select(3);
        assert_eq!(a.expanded(), Some(1));
    }
}
