//! Module grid storage

/// State of a single module while a symbol is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not yet assigned
    #[default]
    Unset,
    /// Held for format/version information, written after masking
    Reserved,
    /// Structural module (finder, separator, timing, alignment, format, version)
    Function(bool),
    /// Data or error correction module
    Data(bool),
}

impl Module {
    /// Dark modules render in the foreground color
    pub fn is_dark(&self) -> bool {
        matches!(self, Module::Function(true) | Module::Data(true))
    }

    /// Function and reserved modules are excluded from data placement and masking
    pub fn is_structural(&self) -> bool {
        matches!(self, Module::Function(_) | Module::Reserved)
    }
}

/// Square module grid addressed by column `x` and row `y`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<Module>,
}

impl ModuleGrid {
    /// Create a grid with every module unset
    pub fn new(size: usize) -> Self {
        Self {
            size,
            modules: vec![Module::Unset; size * size],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get module at (x, y); `Unset` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Module {
        if x >= self.size || y >= self.size {
            return Module::Unset;
        }
        self.modules[y * self.size + x]
    }

    /// Set module at (x, y); ignored outside the grid
    pub fn set(&mut self, x: usize, y: usize, module: Module) {
        if x >= self.size || y >= self.size {
            return;
        }
        self.modules[y * self.size + x] = module;
    }

    /// True if the module is dark; false outside the grid
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_dark()
    }

    /// True if the module holds a data or ECC bit
    pub fn is_data(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Module::Data(_))
    }

    /// Invert a data module; structural modules are left unchanged
    pub fn toggle_data(&mut self, x: usize, y: usize) {
        if let Module::Data(dark) = self.get(x, y) {
            self.set(x, y, Module::Data(!dark));
        }
    }

    /// Number of dark modules
    pub fn count_dark(&self) -> usize {
        self.modules.iter().filter(|m| m.is_dark()).count()
    }

    /// Number of modules in the given state
    pub fn count(&self, predicate: impl Fn(&Module) -> bool) -> usize {
        self.modules.iter().filter(|m| predicate(m)).count()
    }

    /// Rows of modules, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Module]> {
        self.modules.chunks(self.size.max(1))
    }
}

impl Default for ModuleGrid {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_grid() {
        let mut grid = ModuleGrid::new(8);
        assert_eq!(grid.size(), 8);
        assert_eq!(grid.get(3, 4), Module::Unset);

        grid.set(3, 4, Module::Data(true));
        assert!(grid.is_dark(3, 4));
        assert!(grid.is_data(3, 4));
        assert!(!grid.is_dark(3, 3));

        grid.toggle_data(3, 4);
        assert!(!grid.is_dark(3, 4));

        grid.set(5, 5, Module::Function(true));
        grid.toggle_data(5, 5);
        assert!(grid.is_dark(5, 5));
        assert_eq!(grid.count_dark(), 1);
        assert_eq!(grid.rows().count(), 8);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = ModuleGrid::new(8);
        grid.set(10, 10, Module::Data(true)); // Should not panic
        assert!(!grid.is_dark(10, 10));
        assert_eq!(grid.get(10, 10), Module::Unset);
    }

    #[test]
    fn test_structural_tags() {
        assert!(Module::Reserved.is_structural());
        assert!(Module::Function(false).is_structural());
        assert!(!Module::Data(true).is_structural());
        assert!(!Module::Reserved.is_dark());
    }
}
