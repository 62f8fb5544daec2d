use ozkitchen_calendar::{DateSelection, MonthGrid, first_of_month, next_month, previous_month};
use ozkitchen_packaging::MealOption;
use time::Date;

/// State of the "add to date" dialog opened for one meal option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealCalendar {
    option: MealOption,
    month: Date,
    selection: DateSelection,
}

impl MealCalendar {
    pub fn new(option: MealOption, reference: Date) -> Self {
        Self {
            option,
            month: first_of_month(reference),
            selection: DateSelection::default(),
        }
    }

    pub fn option(&self) -> &MealOption {
        &self.option
    }

    /// First day of the displayed month.
    pub fn month(&self) -> Date {
        self.month
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::new(self.month)
    }

    pub fn selection(&self) -> &DateSelection {
        &self.selection
    }

    pub fn previous_month(&mut self) {
        self.month = previous_month(self.month);
    }

    pub fn next_month(&mut self) {
        self.month = next_month(self.month);
    }

    /// Toggles the date behind the cell at `index` of the displayed grid.
    /// Overflow cells select the matching day of the following month.
    /// Returns `false` for padding cells and out of range indexes.
    pub fn toggle_cell(&mut self, index: usize) -> bool {
        let grid = self.grid();
        let Some(date) = grid.cell(index).and_then(|cell| cell.date) else {
            return false;
        };

        self.toggle_date(date);

        true
    }

    pub fn toggle_date(&mut self, date: Date) {
        self.selection = self.selection.toggled(date);
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.grid().is_selected(index, &self.selection)
    }

    /// Takes the selected dates and clears the selection. `None` when
    /// nothing is selected.
    pub fn submit(&mut self) -> Option<Vec<Date>> {
        if self.selection.is_empty() {
            return None;
        }

        let dates = std::mem::take(&mut self.selection).dates().collect();

        Some(dates)
    }

    /// `Choose a date and add <meal> on your meal plan`
    pub fn instructions(&self) -> String {
        format!("Choose a date and add {} on your meal plan", self.option.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ozkitchen_packaging::{Catalog, default_meal_options};
    use time::macros::date;

    fn calendar(reference: Date) -> anyhow::Result<MealCalendar> {
        let catalog = Catalog::new(default_meal_options())?;

        Ok(MealCalendar::new(catalog.require("1")?.clone(), reference))
    }

    #[test]
    fn test_toggle_cells() -> anyhow::Result<()> {
        let mut calendar = calendar(date!(2024 - 02 - 20))?;

        assert!(!calendar.toggle_cell(0));
        assert!(calendar.toggle_cell(3));
        assert!(calendar.toggle_cell(32));
        assert!(!calendar.toggle_cell(42));

        assert!(calendar.is_selected(3));
        assert!(calendar.selection().contains(date!(2024 - 03 - 01)));
        assert_eq!(calendar.selection().len(), 2);

        assert!(calendar.toggle_cell(3));
        assert!(!calendar.is_selected(3));
        assert_eq!(calendar.selection().len(), 1);

        Ok(())
    }

    #[test]
    fn test_selection_survives_month_navigation() -> anyhow::Result<()> {
        let mut calendar = calendar(date!(2025 - 10 - 15))?;

        calendar.toggle_date(date!(2025 - 10 - 31));
        calendar.next_month();
        assert_eq!(calendar.grid().title(), "November 2025");
        calendar.toggle_date(date!(2025 - 11 - 03));
        calendar.previous_month();
        calendar.previous_month();
        assert_eq!(calendar.month(), date!(2025 - 09 - 01));

        assert_eq!(
            calendar.submit(),
            Some(vec![date!(2025 - 10 - 31), date!(2025 - 11 - 03)])
        );
        assert!(calendar.selection().is_empty());
        assert_eq!(calendar.submit(), None);

        Ok(())
    }

    #[test]
    fn test_instructions() -> anyhow::Result<()> {
        let calendar = calendar(date!(2025 - 10 - 15))?;

        assert_eq!(
            calendar.instructions(),
            "Choose a date and add Shiro Ena Gomen on your meal plan"
        );

        Ok(())
    }
}
