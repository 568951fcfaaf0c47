//! Profile editor layout.
//!
//! A form arranged as a grid: the caller's child elements (one per field)
//! fill the grid left to right, `columns` per row, and a final row holds the
//! control that adds a new field. The component does not know what a field
//! is; it only lays out what it is given.
//!
//! Placement is computed by [`GridPlan`] so it can be tested without
//! building widgets.

use iced::widget::{Column, Row, Space, button, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::theme::{SPACING_MD, SPACING_SM, button_primary};

/// Default number of children per grid row.
pub const DEFAULT_COLUMNS: usize = 3;

const ADD_LABEL: &str = "Add field";

// =============================================================================
// GRID PLAN
// =============================================================================

/// What occupies a grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The child at this index, in the order given.
    Child(usize),
    /// The add-field control.
    AddControl,
}

/// Row-by-row placement of `children` items plus the add control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPlan {
    columns: usize,
    rows: Vec<Vec<Slot>>,
}

impl GridPlan {
    /// Place `children` items in rows of `columns`, followed by a row with
    /// the add control. `columns` below one is treated as one.
    pub fn new(children: usize, columns: usize) -> Self {
        let columns = columns.max(1);
        let indices: Vec<usize> = (0..children).collect();
        let mut rows: Vec<Vec<Slot>> = indices
            .chunks(columns)
            .map(|chunk| chunk.iter().map(|&i| Slot::Child(i)).collect())
            .collect();
        rows.push(vec![Slot::AddControl]);
        Self { columns, rows }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.rows
    }

    /// Occupied positions: one per child plus the add control.
    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Slots in reading order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.rows.iter().flatten().copied()
    }
}

// =============================================================================
// PROFILE EDITOR
// =============================================================================

/// Grid form around a list of child editors.
///
/// # Example
///
/// ```rust,ignore
/// let children = fields.iter().map(|f| field_editor(f, ui)).collect();
///
/// ProfileEditor::new(children, Message::Profile(ProfileMessage::AddFieldClicked))
///     .columns(3)
///     .view()
/// ```
pub struct ProfileEditor<'a, M> {
    children: Vec<Element<'a, M>>,
    on_add: M,
    columns: usize,
}

impl<'a, M: Clone + 'a> ProfileEditor<'a, M> {
    /// Create an editor laying out `children`, sending `on_add` when the add
    /// control is pressed.
    pub fn new(children: Vec<Element<'a, M>>, on_add: M) -> Self {
        Self {
            children,
            on_add,
            columns: DEFAULT_COLUMNS,
        }
    }

    /// Set children per row.
    #[must_use]
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let plan = GridPlan::new(self.children.len(), self.columns);
        let mut children: Vec<Option<Element<'a, M>>> =
            self.children.into_iter().map(Some).collect();

        let mut grid = Column::new().spacing(SPACING_MD).width(Length::Fill);

        for slots in plan.rows() {
            if matches!(slots.as_slice(), [Slot::AddControl]) {
                grid = grid.push(add_control(self.on_add.clone()));
                continue;
            }

            let mut cells = Row::new().spacing(SPACING_MD).width(Length::Fill);
            for slot in slots {
                if let Slot::Child(index) = slot
                    && let Some(child) = children.get_mut(*index).and_then(Option::take)
                {
                    cells = cells.push(container(child).width(Length::FillPortion(1)));
                }
            }
            // Pad partial rows so cards keep the same width in every row.
            for _ in slots.len()..plan.columns() {
                cells = cells.push(Space::new().width(Length::FillPortion(1)));
            }
            grid = grid.push(cells);
        }

        grid.into()
    }
}

fn add_control<'a, M: Clone + 'a>(on_add: M) -> Element<'a, M> {
    let content = row![lucide::plus().size(16), text(ADD_LABEL).size(14)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    row![
        button(content)
            .on_press(on_add)
            .padding([SPACING_SM, SPACING_MD])
            .style(button_primary)
    ]
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_count_is_children_plus_one() {
        for n in 0..10 {
            let plan = GridPlan::new(n, 3);
            assert_eq!(plan.slot_count(), n + 1);
            assert_eq!(plan.rows().len(), n.div_ceil(3) + 1);
        }
    }

    #[test]
    fn test_empty_profile_only_has_add_control() {
        let plan = GridPlan::new(0, 3);
        assert_eq!(plan.rows(), &[vec![Slot::AddControl]]);
    }

    #[test]
    fn test_children_keep_order_and_add_control_is_last() {
        let plan = GridPlan::new(4, 3);
        assert_eq!(
            plan.rows(),
            &[
                vec![Slot::Child(0), Slot::Child(1), Slot::Child(2)],
                vec![Slot::Child(3)],
                vec![Slot::AddControl],
            ]
        );
        assert_eq!(plan.slots().last(), Some(Slot::AddControl));
    }

    #[test]
    fn test_zero_columns_treated_as_one() {
        let plan = GridPlan::new(2, 0);
        assert_eq!(plan.columns(), 1);
        assert_eq!(plan.rows().len(), 3);
    }
}
