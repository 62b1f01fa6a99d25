//! Collapsing and expanding subprojects in the project table
//!
//! Rows are identified by index; only their nesting levels matter.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowVisibility {
    levels: Vec<usize>,
    visible: Vec<bool>,
}

impl RowVisibility {
    /// All rows start visible
    pub fn new(levels: Vec<usize>) -> Self {
        let visible = vec![true; levels.len()];
        Self { levels, visible }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    /// Collapse or expand the subprojects below a clicked row
    ///
    /// Collapsing hides every deeper row. Expanding shows only the direct
    /// children, so previously collapsed grandchildren stay collapsed.
    pub fn toggle(&mut self, index: usize) {
        if index + 1 >= self.levels.len() {
            return;
        }

        let level = self.levels[index];
        let hide = self.visible[index + 1];

        for cur in index + 1..self.levels.len() {
            if self.levels[cur] <= level {
                break;
            }

            if hide {
                self.visible[cur] = false;
            } else if self.levels[cur] == level + 1 {
                self.visible[cur] = true;
            }
        }
    }

    /// Hide every sublevel, or show everything if something is hidden
    ///
    /// Top-level rows always stay visible.
    pub fn toggle_all(&mut self) {
        let show = self.visible.iter().any(|v| !v);

        for (visible, level) in self.visible.iter_mut().zip(&self.levels) {
            *visible = show || *level <= 1;
        }
    }
}
