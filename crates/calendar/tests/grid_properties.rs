use ozkitchen_calendar::{GRID_CELLS, MonthGrid, MonthOffset, next_month, previous_month};
use time::{Date, Month};

fn every_month() -> impl Iterator<Item = Date> {
    (1900..=2100).flat_map(|year| {
        (1..=12u8).filter_map(move |month| {
            let month = Month::try_from(month).ok()?;
            Date::from_calendar_date(year, month, 1).ok()
        })
    })
}

#[test]
pub fn test_every_month_has_42_cells_and_full_day_count() -> anyhow::Result<()> {
    for first in every_month() {
        let grid = MonthGrid::new(first);
        let current = grid
            .cells
            .iter()
            .filter(|cell| cell.offset == MonthOffset::Current && cell.day_number().is_some())
            .count();

        assert_eq!(grid.cells.len(), GRID_CELLS);
        assert_eq!(current, first.month().length(first.year()) as usize, "{first}");
        assert!(grid.leading_padding <= 6, "{first}");
        assert!((28..=31).contains(&grid.days_in_month), "{first}");
        assert_eq!(
            grid.leading_padding as usize + grid.days_in_month as usize + grid.overflow_count(),
            GRID_CELLS
        );
        assert!(grid.overflow_count() >= 5, "{first}");
    }

    Ok(())
}

#[test]
pub fn test_cell_offsets_follow_index_boundaries() -> anyhow::Result<()> {
    for first in every_month() {
        let grid = MonthGrid::new(first);
        let padding = grid.leading_padding as usize;
        let boundary = padding + grid.days_in_month as usize;

        for (index, cell) in grid.cells.iter().enumerate() {
            let expected = if index < padding {
                MonthOffset::None
            } else if index < boundary {
                MonthOffset::Current
            } else {
                MonthOffset::Next
            };

            assert_eq!(cell.offset, expected, "{first} #{index}");
            assert_eq!(cell.date.is_none(), index < padding, "{first} #{index}");
        }

        // overflow restarts at 1 and counts up
        let overflow = grid.cells[boundary..]
            .iter()
            .filter_map(|cell| cell.day_number())
            .collect::<Vec<_>>();
        let expected = (1..=overflow.len() as u8).collect::<Vec<_>>();
        assert_eq!(overflow, expected, "{first}");
    }

    Ok(())
}

#[test]
pub fn test_first_day_sits_under_its_weekday() -> anyhow::Result<()> {
    for first in every_month() {
        let grid = MonthGrid::new(first);
        let cell = grid.cells[grid.leading_padding as usize];

        assert_eq!(cell.date, Some(first));
        assert_eq!(
            grid.leading_padding,
            (first.weekday().number_days_from_sunday() + 6) % 7
        );
    }

    Ok(())
}

#[test]
pub fn test_navigation_round_trips() -> anyhow::Result<()> {
    for first in every_month() {
        assert_eq!(previous_month(next_month(first)), first);
        assert_eq!(next_month(previous_month(first)), first);
    }

    Ok(())
}
