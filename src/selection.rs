/// Hovered/focused item of a static panel. Indexes outside the panel are
/// ignored so the selection always points at a real record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverSelection {
    len: usize,
    current: Option<usize>,
}

impl HoverSelection {
    pub fn new(len: usize, initial: Option<usize>) -> Self {
        Self {
            len,
            current: initial.filter(|&index| index < len),
        }
    }

    /// Sticky selection that starts on the first item, as the expertise
    /// panel uses.
    pub fn sticky(len: usize) -> Self {
        Self::new(len, Some(0))
    }

    pub fn hover(&mut self, index: usize) -> bool {
        if index >= self.len || self.current == Some(index) {
            return false;
        }
        self.current = Some(index);
        true
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current == Some(index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_selection_starts_on_first_item() {
        let selection = HoverSelection::sticky(4);
        assert_eq!(selection.current(), Some(0));
        assert!(selection.is_active(0));
    }

    #[test]
    fn hover_switches_detail_and_ignores_out_of_range() {
        let mut selection = HoverSelection::sticky(4);
        assert!(selection.hover(2));
        assert!(!selection.hover(2));
        assert!(!selection.hover(4));
        assert_eq!(selection.current(), Some(2));
    }

    #[test]
    fn clearable_selection_returns_to_none() {
        let mut selection = HoverSelection::new(3, None);
        selection.hover(1);
        selection.clear();
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn empty_panel_has_no_selection() {
        let selection = HoverSelection::sticky(0);
        assert!(selection.is_empty());
        assert_eq!(selection.current(), None);
    }
}
