//! Tile catalog and the selector it populates
//!
//! The catalog is a fixed, ordered table of tile sizes. Each entry carries the
//! floor area (m²) one box covers. At startup the table is pushed into a
//! selectable list, one option per entry, with the first entry selected.

use log::debug;

/// A single tile size on offer
#[derive(Clone, Debug, PartialEq)]
pub struct TileOption {
    /// Human readable size, e.g. "30 x 30 cm"
    pub label: String,
    /// Floor area covered by one box (m²)
    pub coverage_per_box: f64,
}

impl TileOption {
    pub fn new(label: impl Into<String>, coverage_per_box: f64) -> Self {
        Self {
            label: label.into(),
            coverage_per_box,
        }
    }

    /// Option value as the selector stores it ("1.5", "1.08")
    pub fn value_text(&self) -> String {
        format!("{}", self.coverage_per_box)
    }

    /// Text shown in the selector
    pub fn display_label(&self) -> String {
        format!("{} (Doos: {} m²)", self.label, self.coverage_per_box)
    }
}

/// Ordered, immutable list of tile options
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    options: Vec<TileOption>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The stock table of tile sizes
    pub fn standard() -> Self {
        Self {
            options: vec![
                TileOption::new("30 x 30 cm", 1.08),
                TileOption::new("40 x 40 cm", 1.28),
                TileOption::new("50 x 50 cm", 1.50),
                TileOption::new("60 x 60 cm", 1.44),
                TileOption::new("80 x 80 cm", 1.28),
            ],
        }
    }

    pub fn from_options(options: Vec<TileOption>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &[TileOption] {
        &self.options
    }

    pub fn get(&self, index: usize) -> Option<&TileOption> {
        self.options.get(index)
    }

    /// The initially selected entry
    pub fn default_option(&self) -> Option<&TileOption> {
        self.options.first()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// One entry of a selectable list
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    /// Underlying value read back by the calculator
    pub value: String,
    /// Displayed text
    pub label: String,
    pub selected: bool,
}

/// A single-choice list widget that can be filled with options
pub trait SelectList {
    fn append_option(&mut self, option: SelectOption);
}

/// Append one option per catalog entry, in table order, first one selected.
///
/// A missing catalog or widget leaves everything as it is.
pub fn populate_tile_sizes<W: SelectList>(catalog: Option<&Catalog>, widget: Option<&mut W>) {
    let (catalog, widget) = match (catalog, widget) {
        (Some(c), Some(w)) => (c, w),
        _ => {
            debug!("Tile selector not populated: catalog or widget missing");
            return;
        }
    };

    for (index, tile) in catalog.options().iter().enumerate() {
        widget.append_option(SelectOption {
            value: tile.value_text(),
            label: tile.display_label(),
            selected: index == 0,
        });
    }
    debug!("Tile selector populated with {} options", catalog.len());
}

/// In-memory tile size selector
#[derive(Clone, Debug, Default)]
pub struct TileSelector {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl SelectList for TileSelector {
    fn append_option(&mut self, option: SelectOption) {
        if option.selected {
            if let Some(prev) = self.selected.and_then(|i| self.options.get_mut(i)) {
                prev.selected = false;
            }
            self.selected = Some(self.options.len());
        }
        self.options.push(option);
    }
}

impl TileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Value of the current selection, if any
    pub fn selected_value(&self) -> Option<&str> {
        self.selected().map(|o| o.value.as_str())
    }

    /// Select by index; out of range is ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        for (i, option) in self.options.iter_mut().enumerate() {
            option.selected = i == index;
        }
        self.selected = Some(index);
        true
    }

    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let next = match self.selected {
            Some(i) if i + 1 < self.options.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.select(next);
    }

    pub fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let prev = self.selected.map(|i| i.saturating_sub(1)).unwrap_or(0);
        self.select(prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = Catalog::standard();
        let coverages: Vec<f64> = catalog.options().iter().map(|t| t.coverage_per_box).collect();
        assert_eq!(coverages, vec![1.08, 1.28, 1.50, 1.44, 1.28]);
        assert_eq!(catalog.default_option().unwrap().label, "30 x 30 cm");
    }

    #[test]
    fn test_populate_tile_sizes() {
        let catalog = Catalog::standard();
        let mut selector = TileSelector::new();
        populate_tile_sizes(Some(&catalog), Some(&mut selector));

        assert_eq!(selector.options().len(), 5);
        assert_eq!(selector.selected_index(), Some(0));
        assert_eq!(selector.selected_value(), Some("1.08"));

        // Labels combine size and coverage, coverage in shortest form
        assert_eq!(selector.options()[0].label, "30 x 30 cm (Doos: 1.08 m²)");
        assert_eq!(selector.options()[2].label, "50 x 50 cm (Doos: 1.5 m²)");
        assert_eq!(selector.options()[2].value, "1.5");
        assert_eq!(selector.options().iter().filter(|o| o.selected).count(), 1);
    }

    #[test]
    fn test_populate_missing_is_noop() {
        let mut selector = TileSelector::new();
        populate_tile_sizes(None, Some(&mut selector));
        assert!(selector.options().is_empty());
        assert_eq!(selector.selected_value(), None);

        // Missing widget must not panic
        populate_tile_sizes::<TileSelector>(Some(&Catalog::standard()), None);
    }

    #[test]
    fn test_selection_movement() {
        let mut selector = TileSelector::new();
        populate_tile_sizes(Some(&Catalog::standard()), Some(&mut selector));

        selector.select_previous();
        assert_eq!(selector.selected_index(), Some(0));

        selector.select_next();
        selector.select_next();
        assert_eq!(selector.selected_value(), Some("1.5"));

        for _ in 0..10 {
            selector.select_next();
        }
        assert_eq!(selector.selected_index(), Some(4));
        assert!(!selector.select(5));
        assert_eq!(selector.options().iter().filter(|o| o.selected).count(), 1);
    }
}
