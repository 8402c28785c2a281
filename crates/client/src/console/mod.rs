//! Text rendering for the terminal.

mod chooser;
mod presenter;

pub use chooser::ConsoleChooser;
pub use presenter::ConsolePresenter;

use game_core::{CombatantView, ResourceMeter, Skill};

const BAR_CELLS: u32 = 10;

/// Room separator line.
pub(crate) fn divider() -> String {
    "_".repeat(80)
}

/// `LABEL: [XXXX//----] (cur/max)`: full cells, one `/` for a partial cell.
pub(crate) fn meter_bar(label: &str, meter: ResourceMeter) -> String {
    let (current, maximum) = (meter.current(), meter.maximum());
    let (full, partial) = if maximum == 0 {
        (0, false)
    } else {
        let scaled = current * BAR_CELLS;
        (scaled / maximum, scaled % maximum != 0)
    };
    let empty = BAR_CELLS - full - u32::from(partial);

    format!(
        "{}: [{}{}{}] ({}/{})",
        label,
        "X".repeat(full as usize),
        if partial { "/" } else { "" },
        "-".repeat(empty as usize),
        current,
        maximum
    )
}

pub(crate) fn hp_bar(view: &CombatantView) -> String {
    meter_bar("HP", view.hp)
}

pub(crate) fn mp_bar(view: &CombatantView) -> String {
    meter_bar("MP", view.mp)
}

/// `name: description, power + dice d die (cost MP)`
pub(crate) fn skill_line(skill: &Skill) -> String {
    format!(
        "{}: {}, {} + {}d{} ({} MP)",
        skill.name,
        skill.description,
        skill.formula.power,
        skill.formula.dice,
        skill.formula.die,
        skill.cost
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_mark_partial_cells() {
        assert_eq!(
            meter_bar("HP", ResourceMeter::new(15, 40)),
            "HP: [XXX/------] (15/40)"
        );
        assert_eq!(
            meter_bar("HP", ResourceMeter::full(30)),
            "HP: [XXXXXXXXXX] (30/30)"
        );
        assert_eq!(
            meter_bar("HP", ResourceMeter::new(0, 30)),
            "HP: [----------] (0/30)"
        );
    }

    #[test]
    fn empty_capacity_reads_as_an_empty_bar() {
        assert_eq!(
            meter_bar("MP", ResourceMeter::full(0)),
            "MP: [----------] (0/0)"
        );
    }
}
